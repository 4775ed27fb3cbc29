//! Catalogue Context - 馆藏目录上下文
//!
//! 职责:
//! - Book 聚合（书目记录）
//! - BookCopy 实体（实体副本与借出状态）
//! - ISBN / 登录号等值对象

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::Book;
pub use entities::{BookCopy, CopyStatus};
pub use errors::CatalogueError;
pub use value_objects::{AccessionNumber, Author, Isbn, Title};
