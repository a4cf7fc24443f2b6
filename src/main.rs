//! SecureMask - ソースコード匿名化ツール
//!
//! 核心原则：
//! - 匿名化核心是纯函数，不做解析，只做有序正则替换
//! - 界面语言与代码语言是两个独立的选择器
//! - 任何输入都不报错，最坏情况原样返回

pub mod core;
pub mod storage;
pub mod ui;

use anyhow::Result;
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 配置CJK字体（默认界面语言是日语，系统字体缺失时会显示乱码）
fn setup_custom_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    let font_paths = [
        "C:/Windows/Fonts/YuGothM.ttc",   // 游ゴシック
        "C:/Windows/Fonts/meiryo.ttc",    // メイリオ
        "C:/Windows/Fonts/msgothic.ttc",  // MSゴシック
        "C:/Windows/Fonts/msyh.ttc",      // 微软雅黑
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    ];

    let mut font_loaded = false;
    for path in &font_paths {
        if let Ok(font_data) = std::fs::read(path) {
            fonts.font_data.insert(
                "cjk_font".to_owned(),
                FontData::from_owned(font_data).into(),
            );

            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "cjk_font".to_owned());

            fonts.families
                .entry(FontFamily::Monospace)
                .or_default()
                .insert(0, "cjk_font".to_owned());

            font_loaded = true;
            tracing::info!("已加载CJK字体: {}", path);
            break;
        }
    }

    if !font_loaded {
        tracing::warn!("未能加载CJK字体，界面可能显示乱码");
    }

    ctx.set_fonts(fonts);
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("启动 SecureMask - 源代码匿名化工具");

    // 启动GUI
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("SecureMask"),
        ..Default::default()
    };

    eframe::run_native(
        "SecureMask",
        options,
        Box::new(|cc| {
            setup_custom_fonts(&cc.egui_ctx);
            Ok(Box::new(ui::app::SecureMaskApp::new(cc)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI启动失败: {}", e))?;

    Ok(())
}
