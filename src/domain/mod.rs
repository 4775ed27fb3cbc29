//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Catalogue Context: 书目与副本
//! - Membership Context: 读者、借书证与借阅凭证
//! - Staff Context: 馆员
//! - Library Context: 聚合根，编排借还
//!
//! 共享部分: 身份信息、罚款计算、叙述事件

pub mod catalogue;
pub mod events;
pub mod fines;
pub mod identity;
pub mod library;
pub mod membership;
pub mod staff;

pub use events::LibraryEvent;
pub use fines::{FineAssessment, FinePolicy, Rupees};
pub use identity::{Address, Identity, PersonName};
pub use library::{Library, LibraryError};
