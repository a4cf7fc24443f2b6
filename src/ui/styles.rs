//! 样式定义

use eframe::egui::Color32;

/// 颜色主题
pub struct Theme {
    pub primary: Color32,
    pub muted: Color32,
    pub error: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color32::from_rgb(37, 99, 235),    // 蓝色
            muted: Color32::from_rgb(156, 156, 156),    // 灰色
            error: Color32::from_rgb(234, 67, 53),      // 红色
        }
    }
}
