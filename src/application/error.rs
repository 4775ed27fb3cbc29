//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::catalogue::CatalogueError;
use crate::domain::library::LibraryError;
use crate::domain::membership::MembershipError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 领域规则拒绝
    #[error(transparent)]
    Library(#[from] LibraryError),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 读者借书证不足
    pub fn is_insufficient_tickets(&self) -> bool {
        matches!(
            self,
            Self::Library(LibraryError::Membership(MembershipError::InsufficientTickets))
        )
    }

    /// 没有可借副本
    pub fn is_no_copy_available(&self) -> bool {
        matches!(
            self,
            Self::Library(LibraryError::Catalogue(CatalogueError::NoCopyAvailable(_)))
        )
    }

    /// 读者没有该书的借阅
    pub fn is_no_matching_loan(&self) -> bool {
        matches!(
            self,
            Self::Library(LibraryError::Membership(MembershipError::NoMatchingLoan(_)))
        )
    }
}

impl From<CatalogueError> for ApplicationError {
    fn from(err: CatalogueError) -> Self {
        Self::Library(err.into())
    }
}

impl From<MembershipError> for ApplicationError {
    fn from(err: MembershipError) -> Self {
        Self::Library(err.into())
    }
}
