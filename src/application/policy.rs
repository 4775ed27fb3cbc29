//! Lending Policy - 借阅规则参数
//!
//! 由配置生成，注入到各个 Handler

use chrono::Duration;

use crate::domain::FinePolicy;

/// 借期上限（天）
pub const MAX_LOAN_PERIOD_DAYS: u32 = 3650;

/// 借阅规则
#[derive(Debug, Clone)]
pub struct LendingPolicy {
    /// 默认借期
    pub loan_period: Duration,
    /// 登录号前缀
    pub accession_prefix: String,
    /// 新读者默认借书证数
    pub default_tickets: u32,
    pub fines: FinePolicy,
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            loan_period: Duration::days(14),
            accession_prefix: "ACC".to_string(),
            default_tickets: 1,
            fines: FinePolicy::default(),
        }
    }
}

impl LendingPolicy {
    /// 命令里指定了借期则覆盖默认值
    pub fn loan_period_or(&self, days: Option<u32>) -> Duration {
        days.map(|d| Duration::days(i64::from(d)))
            .unwrap_or(self.loan_period)
    }
}
