//! Libdesk - 图书馆借阅记账系统
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalogue Context: 图书与馆藏副本
//! - Membership Context: 读者与借书证
//! - Staff: 图书管理员（上架、收罚款）
//! - Library: 聚合根，编排借还书与罚款计算
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Clock, EventPublisher）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//! - LibraryDesk: 汇总所有 Handler 的服务台
//!
//! 基础设施层 (infrastructure/):
//! - Clock: 系统时钟与可手动推进的时钟
//! - Events: 广播通道事件发布

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
