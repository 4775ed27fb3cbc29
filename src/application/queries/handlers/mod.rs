//! Query Handlers 实现

mod catalogue_handlers;
mod reader_handlers;

pub use catalogue_handlers::*;
pub use reader_handlers::*;
