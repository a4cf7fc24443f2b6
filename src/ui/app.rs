//! 主应用程序
//!
//! 粘贴代码 → 选择代码语言 → 执行匿名化 → 复制或保存结果。

use crate::core::anonymizer::anonymize;
use crate::core::models::{AppConfig, CodeLanguage};
use crate::storage::config::ConfigManager;
use crate::ui::i18n::{translations, Translations};
use crate::ui::styles::Theme;
use eframe::egui::{self, RichText};

/// 主应用程序
pub struct SecureMaskApp {
    /// 配置（界面语言 + 上次选择的代码语言）
    config: AppConfig,
    /// 配置管理器
    config_manager: ConfigManager,
    /// 主题
    theme: Theme,
    /// 输入代码
    input_code: String,
    /// 匿名化结果
    output_code: String,
    /// 状态消息
    status_message: String,
    /// 上一次操作是否失败（决定状态栏颜色）
    status_is_error: bool,
}

impl SecureMaskApp {
    /// 创建新的应用实例
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config_manager = ConfigManager::new(ConfigManager::default_path());
        let config = config_manager.load().unwrap_or_else(|e| {
            tracing::warn!("加载配置失败，使用默认配置: {}", e);
            AppConfig::default()
        });

        let status_message = translations(config.ui_language).status_ready.to_string();

        Self {
            config,
            config_manager,
            theme: Theme::default(),
            input_code: String::new(),
            output_code: String::new(),
            status_message,
            status_is_error: false,
        }
    }

    /// 更新状态栏消息
    fn set_status(&mut self, message: &str, is_error: bool) {
        self.status_message = message.to_string();
        self.status_is_error = is_error;
    }

    /// 执行匿名化
    ///
    /// 空白输入不会走到这里：执行按钮在输入trim后为空时是禁用的。
    fn run_anonymize(&mut self) {
        let tag = self.config.code_language.tag();
        self.output_code = anonymize(&self.input_code, tag);

        let t = translations(self.config.ui_language);
        self.set_status(t.status_done, false);
        tracing::info!(
            "匿名化完成: 语言={}, 输入{}字符, 输出{}字符",
            self.config.code_language,
            self.input_code.chars().count(),
            self.output_code.chars().count()
        );
    }

    /// 保存配置，失败只记日志不打断使用
    fn persist_config(&self) {
        if let Err(e) = self.config_manager.save(&self.config) {
            tracing::warn!("保存配置失败: {}", e);
        }
    }

    /// 从文件载入代码到输入框
    fn open_code_file(&mut self) {
        let t = translations(self.config.ui_language);
        if let Some(path) = rfd::FileDialog::new().pick_file() {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    self.input_code = content;
                    self.set_status(t.status_opened, false);
                }
                Err(e) => {
                    tracing::warn!("读取文件失败 {}: {}", path.display(), e);
                    self.set_status(t.status_open_failed, true);
                }
            }
        }
    }

    /// 将匿名化结果保存到文件
    fn save_output_file(&mut self) {
        let t = translations(self.config.ui_language);
        if let Some(path) = rfd::FileDialog::new().save_file() {
            match std::fs::write(&path, &self.output_code) {
                Ok(()) => {
                    self.set_status(t.status_saved, false);
                }
                Err(e) => {
                    tracing::warn!("保存文件失败 {}: {}", path.display(), e);
                    self.set_status(t.status_save_failed, true);
                }
            }
        }
    }
}

impl eframe::App for SecureMaskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let t = translations(self.config.ui_language);

        // 顶部菜单栏
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(t.menu_file, |ui| {
                    if ui.button(t.menu_open).clicked() {
                        self.open_code_file();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(!self.output_code.is_empty(), egui::Button::new(t.menu_save))
                        .clicked()
                    {
                        self.save_output_file();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button(t.menu_quit).clicked() {
                        std::process::exit(0);
                    }
                });

                // 界面语言切换（界面语言 ≠ 代码语言）
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = format!("🌐 {}", self.config.ui_language);
                    if ui.button(label).clicked() {
                        self.config.ui_language = self.config.ui_language.toggle();
                        let ready = translations(self.config.ui_language).status_ready;
                        self.set_status(ready, false);
                        self.persist_config();
                    }
                });
            });
        });

        // 底部状态栏
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.status_is_error {
                    ui.label(RichText::new(&self.status_message).color(self.theme.error));
                } else {
                    ui.label(&self.status_message);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {} / {} {}",
                            t.chars_in,
                            self.input_code.chars().count(),
                            t.chars_out,
                            self.output_code.chars().count()
                        ))
                        .color(self.theme.muted),
                    );
                });
            });
        });

        // 主内容区域
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.heading(
                        RichText::new(format!("🛡️ {}", t.title))
                            .size(32.0)
                            .color(self.theme.primary),
                    );
                    ui.label(RichText::new(t.subtitle).color(self.theme.muted));
                });

                ui.add_space(16.0);

                self.render_input_section(ui, t);

                ui.add_space(16.0);

                self.render_output_section(ui, t);
            });
        });
    }
}

impl SecureMaskApp {
    /// 渲染输入区域：代码编辑框 + 代码语言下拉框 + 执行按钮
    fn render_input_section(&mut self, ui: &mut egui::Ui, t: &Translations) {
        ui.group(|ui| {
            ui.label(RichText::new(t.input_label).strong());

            ui.add(
                egui::TextEdit::multiline(&mut self.input_code)
                    .hint_text(t.input_placeholder)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(12),
            );

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label(t.language_select_label);

                let mut language_changed = false;
                egui::ComboBox::from_id_salt("code_language")
                    .selected_text(self.config.code_language.to_string())
                    .show_ui(ui, |ui| {
                        for lang in CodeLanguage::ALL {
                            if ui
                                .selectable_value(
                                    &mut self.config.code_language,
                                    lang,
                                    lang.to_string(),
                                )
                                .changed()
                            {
                                language_changed = true;
                            }
                        }
                    });
                if language_changed {
                    self.persist_config();
                }

                // 空白输入不调用匿名化核心，在这里就挡住
                let can_execute = !self.input_code.trim().is_empty();
                if ui
                    .add_enabled(can_execute, egui::Button::new(t.execute_button))
                    .clicked()
                {
                    self.run_anonymize();
                }
            });
        });
    }

    /// 渲染输出区域：只读结果框 + 复制按钮
    fn render_output_section(&mut self, ui: &mut egui::Ui, t: &Translations) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(t.output_label).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(
                            !self.output_code.is_empty(),
                            egui::Button::new(t.copy_button),
                        )
                        .clicked()
                    {
                        ui.ctx().copy_text(self.output_code.clone());
                        self.set_status(t.status_copied, false);
                    }
                });
            });

            if self.output_code.is_empty() {
                ui.label(RichText::new(t.output_placeholder).color(self.theme.muted).monospace());
            } else {
                ui.add(
                    egui::TextEdit::multiline(&mut self.output_code)
                        .interactive(false)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY)
                        .desired_rows(12),
                );
            }
        });
    }
}
