//! Fine Commands

use crate::domain::membership::ReaderId;
use crate::domain::staff::StaffId;

/// 收取罚款命令
#[derive(Debug, Clone)]
pub struct CollectFine {
    pub staff_id: StaffId,
    pub reader_id: ReaderId,
    /// 金额（卢比）
    pub amount: u64,
}
