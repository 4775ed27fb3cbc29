//! Fines - 逾期罚款计算
//!
//! 纯函数，不依赖系统时间：调用方传入 due 与 now

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 金额（卢比，整数）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rupees(u64);

impl Rupees {
    pub const ZERO: Rupees = Rupees(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn saturating_add(self, other: Rupees) -> Rupees {
        Rupees(self.0.saturating_add(other.0))
    }

    pub fn checked_sub(self, other: Rupees) -> Option<Rupees> {
        self.0.checked_sub(other.0).map(Rupees)
    }
}

impl std::fmt::Display for Rupees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rs. {}", self.0)
    }
}

/// 逾期整天数，向零截断；未到期时为 0 或负数
pub fn days_late(due_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - due_at).num_days()
}

/// 一次罚款评估结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineAssessment {
    /// 逾期天数（未逾期为 0）
    pub days_late: u64,
    pub amount: Rupees,
}

/// 罚款策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinePolicy {
    rate_per_day: Rupees,
}

impl Default for FinePolicy {
    fn default() -> Self {
        Self {
            rate_per_day: Rupees(1),
        }
    }
}

impl FinePolicy {
    pub fn new(rate_per_day: Rupees) -> Self {
        Self { rate_per_day }
    }

    pub fn rate_per_day(&self) -> Rupees {
        self.rate_per_day
    }

    /// days <= 0 时不罚款，无上限
    pub fn fine_for_days(&self, days: i64) -> Rupees {
        if days <= 0 {
            return Rupees::ZERO;
        }
        Rupees(self.rate_per_day.0.saturating_mul(days as u64))
    }

    pub fn assess(&self, due_at: DateTime<Utc>, now: DateTime<Utc>) -> FineAssessment {
        let days = days_late(due_at, now).max(0);
        FineAssessment {
            days_late: days as u64,
            amount: self.fine_for_days(days),
        }
    }
}
