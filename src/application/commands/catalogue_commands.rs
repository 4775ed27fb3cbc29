//! Catalogue Commands

use crate::domain::staff::StaffId;

/// 新书入库命令
#[derive(Debug, Clone)]
pub struct AddBook {
    pub staff_id: StaffId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: usize,
}

/// 追加副本命令
#[derive(Debug, Clone)]
pub struct AddCopies {
    pub staff_id: StaffId,
    pub isbn: String,
    pub copies: usize,
}
