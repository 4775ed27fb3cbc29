//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod clock;
mod event_publisher;

pub use clock::ClockPort;
pub use event_publisher::EventPublisherPort;
