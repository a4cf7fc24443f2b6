//! UI模块 - eframe/egui界面

pub mod app;
pub mod i18n;
pub mod styles;
