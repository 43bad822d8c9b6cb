//! 配置文件加载测试

use optional::logging::{LogFormat, LogLevel};
use optional::{Config, ConfigError, OptionalError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("optional.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"
format = "compact"
show_thread_ids = true
"#,
    )?;

    let config = Config::load(&path)?;
    // 环境变量可能覆盖级别和格式，只检查文件独有字段
    assert!(config.logging.show_thread_ids);
    if std::env::var(optional::config::ENV_LOG_LEVEL).is_err() {
        assert_eq!(config.logging.level, LogLevel::Debug);
    }
    if std::env::var(optional::config::ENV_LOG_FORMAT).is_err() {
        assert_eq!(config.logging.format, LogFormat::Compact);
    }
    Ok(())
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(
        err,
        OptionalError::Config(ConfigError::FileNotFound(_))
    ));
}

#[test]
fn test_load_malformed_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("optional.toml");
    fs::write(&path, "[logging\nlevel = ")?;

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(
        err,
        OptionalError::Config(ConfigError::InvalidFormat(_))
    ));
    Ok(())
}
