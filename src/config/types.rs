//! Configuration Types
//!
//! 定义所有配置结构体

use chrono::Duration;
use serde::Deserialize;

use crate::application::LendingPolicy;
use crate::domain::{FinePolicy, Rupees};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 借阅配置
    #[serde(default)]
    pub loans: LoansConfig,

    /// 罚款配置
    #[serde(default)]
    pub fines: FinesConfig,

    /// 读者配置
    #[serde(default)]
    pub readers: ReadersConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// 生成注入 Handler 的借阅规则
    pub fn lending_policy(&self) -> LendingPolicy {
        LendingPolicy {
            loan_period: Duration::days(i64::from(self.loans.period_days)),
            accession_prefix: self.loans.accession_prefix.clone(),
            default_tickets: self.readers.default_tickets,
            fines: FinePolicy::new(Rupees::new(self.fines.rate_per_day)),
        }
    }
}

/// 借阅配置
#[derive(Debug, Clone, Deserialize)]
pub struct LoansConfig {
    /// 默认借期（天）
    #[serde(default = "default_period_days")]
    pub period_days: u32,

    /// 登录号前缀
    #[serde(default = "default_accession_prefix")]
    pub accession_prefix: String,
}

fn default_period_days() -> u32 {
    14
}

fn default_accession_prefix() -> String {
    "ACC".to_string()
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            period_days: default_period_days(),
            accession_prefix: default_accession_prefix(),
        }
    }
}

/// 罚款配置
#[derive(Debug, Clone, Deserialize)]
pub struct FinesConfig {
    /// 每逾期一天的罚款（卢比）
    #[serde(default = "default_rate_per_day")]
    pub rate_per_day: u64,
}

fn default_rate_per_day() -> u64 {
    1
}

impl Default for FinesConfig {
    fn default() -> Self {
        Self {
            rate_per_day: default_rate_per_day(),
        }
    }
}

/// 读者配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReadersConfig {
    /// 注册时默认发放的借书证数
    #[serde(default = "default_tickets")]
    pub default_tickets: u32,
}

fn default_tickets() -> u32 {
    1
}

impl Default for ReadersConfig {
    fn default() -> Self {
        Self {
            default_tickets: default_tickets(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.loans.period_days, 14);
        assert_eq!(config.loans.accession_prefix, "ACC");
        assert_eq!(config.fines.rate_per_day, 1);
        assert_eq!(config.readers.default_tickets, 1);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_lending_policy() {
        let mut config = AppConfig::default();
        config.loans.period_days = 21;
        config.fines.rate_per_day = 2;

        let policy = config.lending_policy();
        assert_eq!(policy.loan_period, Duration::days(21));
        assert_eq!(policy.fines.fine_for_days(3), Rupees::new(6));
    }
}
