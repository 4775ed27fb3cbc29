//! Membership Context - 读者上下文
//!
//! 职责:
//! - Reader 聚合（借阅配额、在借记录、未缴罚款）
//! - LibraryTicket 实体（一次借阅绑定一个副本）

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::Reader;
pub use entities::LibraryTicket;
pub use errors::MembershipError;
pub use value_objects::{ReaderId, TicketId};
