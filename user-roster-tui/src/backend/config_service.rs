//! 配置服务
//!
//! 优先级（低 → 高）：内置默认值 → JSON 配置文件 → 环境变量。
//! 配置只读，应用从不写回。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use user_roster_core::source::{DEFAULT_ENDPOINT, DEFAULT_RESULTS};
use user_roster_core::SourceConfig;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖请求地址
pub const ENV_ENDPOINT: &str = "USER_ROSTER_ENDPOINT";
/// 覆盖请求条数
pub const ENV_RESULTS: &str = "USER_ROSTER_RESULTS";
/// 覆盖界面语言
pub const ENV_LANG: &str = "USER_ROSTER_LANG";
/// 覆盖主题
pub const ENV_THEME: &str = "USER_ROSTER_THEME";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 用户 API 地址
    pub endpoint: String,
    /// 请求条数（results 查询参数）
    pub results: u32,
    /// 请求超时（秒）
    pub timeout_secs: u64,
    /// 界面语言（en-US / es-ES）
    pub language: String,
    /// 主题（dark / light）
    pub theme: String,
    /// 启动时是否开启行着色
    pub row_coloring: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: DEFAULT_RESULTS,
            timeout_secs: 30,
            language: Language::EnUs.code().to_string(),
            theme: "dark".to_string(),
            row_coloring: false,
        }
    }
}

impl AppConfig {
    /// 转换为数据源配置（results 会被限制在 1..=5000）
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig::new(self.endpoint.clone())
            .with_results(Some(self.results))
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// 界面语言，无法识别时回退到英文
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language {:?}, using en-US", self.language);
            Language::EnUs
        })
    }

    /// 主题，无法识别时回退到深色
    pub fn theme(&self) -> Theme {
        Theme::from_code(&self.theme).unwrap_or_else(|| {
            log::warn!("Unknown theme {:?}, using dark", self.theme);
            Theme::Dark
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 获取默认配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("user-roster")
        .join("config.json")
}

/// 本地配置服务（JSON 文件 + 环境变量）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 只读取文件；文件不存在时返回默认值，无法读取或格式错误时记录日志并返回默认值
    fn load_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config file at {}", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Ignoring unreadable config file {}: {e}", self.path.display());
                return Ok(AppConfig::default());
            }
        };
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
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let config = self.load_file()?;
        Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
    }
}

/// 用环境变量覆盖配置
///
/// `lookup` 按变量名取值，便于测试时注入
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(endpoint) = lookup(ENV_ENDPOINT) {
        config.endpoint = endpoint;
    }
    if let Some(results) = lookup(ENV_RESULTS) {
        match results.trim().parse() {
            Ok(n) => config.results = n,
            Err(e) => log::warn!("Ignoring {ENV_RESULTS}={results:?}: {e}"),
        }
    }
    if let Some(language) = lookup(ENV_LANG) {
        config.language = language;
    }
    if let Some(theme) = lookup(ENV_THEME) {
        config.theme = theme;
    }
    config
}
