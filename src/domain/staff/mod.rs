//! Staff Context - 馆员上下文
//!
//! 馆员负责新书入库与收取罚款

mod aggregate;
mod value_objects;

pub use aggregate::{FineReceipt, LibraryStaff, NewBook};
pub use value_objects::StaffId;
