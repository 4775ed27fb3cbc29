//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::application::MAX_LOAN_PERIOD_DAYS;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `LIBDESK_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `LIBDESK_LOANS__PERIOD_DAYS=21`
/// - `LIBDESK_FINES__RATE_PER_DAY=2`
/// - `LIBDESK_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("loans.period_days", 14)?
        .set_default("loans.accession_prefix", "ACC")?
        .set_default("fines.rate_per_day", 1)?
        .set_default("readers.default_tickets", 1)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("LIBDESK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.loans.period_days == 0 {
        return Err(ConfigError::ValidationError(
            "Loan period cannot be 0 days".to_string(),
        ));
    }

    if config.loans.period_days > MAX_LOAN_PERIOD_DAYS {
        return Err(ConfigError::ValidationError(format!(
            "Loan period cannot exceed {} days",
            MAX_LOAN_PERIOD_DAYS
        )));
    }

    if config.loans.accession_prefix.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Accession prefix cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Library Desk Configuration ===");
    tracing::info!("Loan Period: {} days", config.loans.period_days);
    tracing::info!("Accession Prefix: {}", config.loans.accession_prefix);
    tracing::info!("Fine Rate: Rs. {} per day", config.fines.rate_per_day);
    tracing::info!("Default Tickets: {}", config.readers.default_tickets);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("==================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_loan_period() {
        let mut config = AppConfig::default();
        config.loans.period_days = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_excessive_loan_period() {
        let mut config = AppConfig::default();
        config.loans.period_days = MAX_LOAN_PERIOD_DAYS;
        assert!(validate_config(&config).is_ok());

        config.loans.period_days = u32::MAX;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_blank_prefix() {
        let mut config = AppConfig::default();
        config.loans.accession_prefix = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[loans]\nperiod_days = 7\naccession_prefix = \"LIB-\"\n\n[fines]\nrate_per_day = 5"
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.loans.period_days, 7);
        assert_eq!(config.loans.accession_prefix, "LIB-");
        assert_eq!(config.fines.rate_per_day, 5);
        assert_eq!(config.readers.default_tickets, 1);
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[log]\nlevel = \"warn\"").unwrap();

        std::env::set_var("LIBDESK_LOG__LEVEL", "debug");
        std::env::set_var("LIBDESK_LOG__JSON", "true");
        let result = load_config_from_path(Some(file.path()));
        std::env::remove_var("LIBDESK_LOG__LEVEL");
        std::env::remove_var("LIBDESK_LOG__JSON");

        let config = result.unwrap();
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
    }

    #[test]
    fn test_invalid_file_values_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[loans]\nperiod_days = 0").unwrap();

        let result = load_config_from_path(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
