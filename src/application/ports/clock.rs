//! Clock Port - 当前时间来源
//!
//! 借期与罚款都依赖"现在"，由端口注入以便测试和演示时控制时间

use chrono::{DateTime, Utc};

/// Clock Port
pub trait ClockPort: Send + Sync {
    /// 当前时间
    fn now(&self) -> DateTime<Utc>;
}
