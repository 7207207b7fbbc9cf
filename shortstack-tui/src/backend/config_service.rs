//! 配置服务
//!
//! 配置文件：`<config_dir>/shortstack-tui/config.json`
//!
//! ```json
//! { "api_base_url": "http://127.0.0.1:5000", "language": "en-US", "theme": "dark" }
//! ```
//!
//! 环境变量 `SHORTSTACK_API_URL` 覆盖 `api_base_url`（不写回文件）。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖服务地址的环境变量
pub const API_URL_ENV: &str = "SHORTSTACK_API_URL";

/// 默认服务地址
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// 获取应用目录路径（配置、日志）
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shortstack-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub language: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            language: Language::EnUs.code().to_string(),
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 配置中的语言，无法识别时回退为默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    /// 实际使用的服务地址：非空的环境变量优先
    pub fn resolve_base_url(&self, env_override: Option<String>) -> String {
        env_override
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.api_base_url.clone())
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认路径
    pub fn new() -> Self {
        Self::with_path(app_dir().join("config.json"))
    }

    /// 使用指定路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    /// 文件不存在时返回默认配置；内容损坏时记录警告并返回默认配置
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed config file {}: {e}",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}
