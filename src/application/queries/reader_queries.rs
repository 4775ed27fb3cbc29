//! Reader Queries

use crate::domain::membership::ReaderId;

/// 获取读者详情查询
#[derive(Debug, Clone)]
pub struct GetReader {
    pub reader_id: ReaderId,
}

/// 列出所有逾期借阅查询
#[derive(Debug, Clone)]
pub struct ListOverdueLoans;
