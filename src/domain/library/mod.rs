//! Library Context - 图书馆聚合根
//!
//! 持有全部书目、读者与馆员，编排借书、还书、续借与罚款计算

mod aggregate;
mod errors;

pub use aggregate::{Library, OverdueLoan, ReturnOutcome};
pub use errors::LibraryError;
