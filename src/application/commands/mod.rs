//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod catalogue_commands;
mod fine_commands;
mod loan_commands;
mod reader_commands;

pub mod handlers;

pub use catalogue_commands::*;
pub use fine_commands::*;
pub use loan_commands::*;
pub use reader_commands::*;
