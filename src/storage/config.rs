//! 配置文件管理模块

use crate::core::models::AppConfig;
use anyhow::Result;
use std::path::PathBuf;

/// 配置管理器
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// 创建配置管理器
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// 获取默认配置路径
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "securemask", "SecureMask")
            .map(|d| d.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("config.json"))
    }

    /// 加载配置，文件不存在时返回默认值
    pub fn load(&self) -> Result<AppConfig> {
        if self.config_path.exists() {
            let content = std::fs::read_to_string(&self.config_path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(AppConfig::default())
        }
    }

    /// 保存配置
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// 重置为默认配置
    pub fn reset(&self) -> Result<()> {
        self.save(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CodeLanguage, UiLanguage};
    use tempfile::tempdir;

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let manager = ConfigManager::new(config_path);

        let config = AppConfig {
            ui_language: UiLanguage::En,
            code_language: CodeLanguage::Css,
        };

        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.ui_language, UiLanguage::En);
        assert_eq!(loaded.code_language, CodeLanguage::Css);
    }

    #[test]
    fn test_missing_config_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("absent.json"));

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.ui_language, UiLanguage::Ja);
        assert_eq!(loaded.code_language, CodeLanguage::Java);
    }

    #[test]
    fn test_reset_writes_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let manager = ConfigManager::new(config_path);
        manager
            .save(&AppConfig {
                ui_language: UiLanguage::En,
                code_language: CodeLanguage::Python,
            })
            .unwrap();

        manager.reset().unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.ui_language, UiLanguage::Ja);
        assert_eq!(loaded.code_language, CodeLanguage::Java);
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "not json").unwrap();

        let manager = ConfigManager::new(config_path);
        assert!(manager.load().is_err());
    }
}
