//! Reader & Staff Registration Commands

use crate::domain::membership::ReaderId;

/// 注册读者命令
#[derive(Debug, Clone)]
pub struct RegisterReader {
    pub name: String,
    pub address: String,
    /// 未指定时使用配置中的默认借书证数
    pub initial_tickets: Option<u32>,
}

/// 购买额外借书证命令
#[derive(Debug, Clone)]
pub struct PurchaseTickets {
    pub reader_id: ReaderId,
    pub count: u32,
}

/// 登记馆员命令
#[derive(Debug, Clone)]
pub struct RegisterStaff {
    pub name: String,
    pub address: String,
}
