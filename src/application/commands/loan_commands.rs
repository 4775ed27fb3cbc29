//! Loan Commands

use crate::domain::membership::ReaderId;

/// 借书命令
#[derive(Debug, Clone)]
pub struct BorrowBook {
    pub reader_id: ReaderId,
    pub isbn: String,
    /// 覆盖默认借期（天）
    pub loan_period_days: Option<u32>,
}

/// 还书命令
#[derive(Debug, Clone)]
pub struct ReturnBook {
    pub reader_id: ReaderId,
    pub isbn: String,
}

/// 续借命令
#[derive(Debug, Clone)]
pub struct RenewLoan {
    pub reader_id: ReaderId,
    pub isbn: String,
    pub loan_period_days: Option<u32>,
}
