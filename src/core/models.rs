//! 核心数据模型定义

use serde::{Deserialize, Serialize};

/// 界面语言
/// 只影响界面文案，与待匿名化的代码语言无关
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UiLanguage {
    /// 日语（默认）
    #[default]
    Ja,
    /// 英语
    En,
}

impl UiLanguage {
    /// 切换到另一种界面语言
    pub fn toggle(&self) -> Self {
        match self {
            UiLanguage::Ja => UiLanguage::En,
            UiLanguage::En => UiLanguage::Ja,
        }
    }
}

impl std::fmt::Display for UiLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiLanguage::Ja => write!(f, "JA"),
            UiLanguage::En => write!(f, "EN"),
        }
    }
}

/// 用户选择的代码语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CodeLanguage {
    #[default]
    Java,
    Python,
    JavaScript,
    Css,
}

impl CodeLanguage {
    /// 全部可选项（下拉框使用）
    pub const ALL: [CodeLanguage; 4] = [
        CodeLanguage::Java,
        CodeLanguage::Python,
        CodeLanguage::JavaScript,
        CodeLanguage::Css,
    ];

    /// 映射到匿名化核心理解的规则集标签
    /// Java/Python/JavaScript 三者的区别仅是界面展示，规则集完全相同
    pub fn tag(&self) -> LanguageTag {
        match self {
            CodeLanguage::Css => LanguageTag::Css,
            _ => LanguageTag::Generic,
        }
    }
}

impl std::fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeLanguage::Java => write!(f, "Java"),
            CodeLanguage::Python => write!(f, "Python"),
            CodeLanguage::JavaScript => write!(f, "JavaScript"),
            CodeLanguage::Css => write!(f, "CSS"),
        }
    }
}

/// 匿名化规则集标签
/// 核心只认识两类规则集，与界面上的四个代码语言选项解耦
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageTag {
    /// 通用规则集（class / function / var）
    Generic,
    /// CSS规则集（选择器 / 自定义属性 / 动画名）
    Css,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// 界面语言
    #[serde(default)]
    pub ui_language: UiLanguage,
    /// 上次选择的代码语言
    #[serde(default)]
    pub code_language: CodeLanguage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tag_mapping() {
        // 三种编程语言共用同一套通用规则集
        assert_eq!(CodeLanguage::Java.tag(), LanguageTag::Generic);
        assert_eq!(CodeLanguage::Python.tag(), LanguageTag::Generic);
        assert_eq!(CodeLanguage::JavaScript.tag(), LanguageTag::Generic);
        assert_eq!(CodeLanguage::Css.tag(), LanguageTag::Css);
    }

    #[test]
    fn test_ui_language_toggle() {
        assert_eq!(UiLanguage::Ja.toggle(), UiLanguage::En);
        assert_eq!(UiLanguage::En.toggle(), UiLanguage::Ja);
    }
}
