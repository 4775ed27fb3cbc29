//! Event Publisher Port - 叙述事件出口

use crate::domain::LibraryEvent;

/// Event Publisher Port
///
/// 发布失败（例如没有订阅者）不影响业务操作
pub trait EventPublisherPort: Send + Sync {
    fn publish(&self, event: LibraryEvent);
}
