//! Event Publisher Implementation
//!
//! 基于 broadcast 通道的叙述事件发布，展示层订阅后渲染

use tokio::sync::broadcast;

use crate::application::ports::EventPublisherPort;
use crate::domain::LibraryEvent;

/// 通道容量
const CHANNEL_CAPACITY: usize = 256;

/// 事件发布器
pub struct EventPublisher {
    channel: broadcast::Sender<LibraryEvent>,
}

impl EventPublisher {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { channel: tx }
    }

    /// 订阅事件（只接收订阅之后发布的事件）
    pub fn subscribe(&self) -> broadcast::Receiver<LibraryEvent> {
        self.channel.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.channel.receiver_count()
    }
}

impl EventPublisherPort for EventPublisher {
    fn publish(&self, event: LibraryEvent) {
        let name = event.name();
        if let Err(e) = self.channel.send(event) {
            tracing::debug!(
                event = name,
                error = %e,
                "Failed to publish event (no receivers)"
            );
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::staff::StaffId;

    fn sample_event() -> LibraryEvent {
        LibraryEvent::StaffRegistered {
            staff_id: StaffId::new(),
            name: "Desk Clerk".to_string(),
        }
    }

    #[test]
    fn test_subscriber_receives_in_order() {
        let publisher = EventPublisher::new();
        let mut rx = publisher.subscribe();

        publisher.publish(sample_event());
        publisher.publish(LibraryEvent::OperationRefused {
            operation: "borrow_book".to_string(),
            reason: "No copies available for this book.".to_string(),
        });

        assert_eq!(rx.try_recv().unwrap().name(), "staff_registered");
        assert_eq!(rx.try_recv().unwrap().name(), "operation_refused");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_publish_without_subscribers_is_ignored() {
        let publisher = EventPublisher::new();
        assert_eq!(publisher.subscriber_count(), 0);
        publisher.publish(sample_event());
    }
}
