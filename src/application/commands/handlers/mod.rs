//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod catalogue_handlers;
mod fine_handlers;
mod loan_handlers;
mod reader_handlers;

pub use catalogue_handlers::*;
pub use fine_handlers::*;
pub use loan_handlers::*;
pub use reader_handlers::*;

use crate::application::error::ApplicationError;
use crate::application::ports::EventPublisherPort;
use crate::domain::LibraryEvent;

/// 记录被拒绝的操作并发布叙述事件，原样返回错误
fn refuse(
    publisher: &dyn EventPublisherPort,
    operation: &'static str,
    err: ApplicationError,
) -> ApplicationError {
    tracing::warn!(operation = operation, error = %err, "Operation refused");
    publisher.publish(LibraryEvent::OperationRefused {
        operation: operation.to_string(),
        reason: err.to_string(),
    });
    err
}
