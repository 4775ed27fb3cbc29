//! Library Context - Errors

use thiserror::Error;

use crate::domain::catalogue::{CatalogueError, Isbn};
use crate::domain::membership::MembershipError;
use crate::domain::staff::StaffId;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Membership(#[from] MembershipError),

    #[error("Staff member not found: {0}")]
    StaffNotFound(StaffId),

    #[error("Loan of {0} is overdue; return it and pay the fine before renewing")]
    LoanOverdue(Isbn),
}
