// optional 配置模块
//
// 目前只承载日志配置：TOML 文件为基础，`OPTIONAL_*` 环境变量覆盖

use std::collections::HashMap;
use std::env;
use std::path::Path;

use optional_types::{ConfigError, Result};
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "OPTIONAL_LOG_LEVEL";
/// Environment variable overriding `logging.format`.
pub const ENV_LOG_FORMAT: &str = "OPTIONAL_LOG_FORMAT";

/// optional 主配置结构
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Load a TOML file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
            _ => ConfigError::LoadFailed(format!("{}: {}", path.display(), e)),
        })?;

        let config = Self::from_toml_str(&content)?.with_env_overrides(&env_map())?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(&env_map())
    }

    /// Apply `OPTIONAL_*` overrides taken from `env`.
    pub fn with_env_overrides(mut self, env: &HashMap<String, String>) -> Result<Self> {
        if let Some(level) = env.get(ENV_LOG_LEVEL) {
            self.logging.level = level.parse()?;
        }
        if let Some(format) = env.get(ENV_LOG_FORMAT) {
            self.logging.format = format.parse()?;
        }
        Ok(self)
    }
}

fn env_map() -> HashMap<String, String> {
    let mut env_map = HashMap::new();
    for key in [ENV_LOG_LEVEL, ENV_LOG_FORMAT] {
        if let Ok(val) = env::var(key) {
            env_map.insert(key.to_string(), val);
        }
    }
    env_map
}
