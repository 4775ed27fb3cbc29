//! Membership Context - Errors

use thiserror::Error;

use super::{ReaderId, TicketId};
use crate::domain::catalogue::Isbn;
use crate::domain::fines::Rupees;

#[derive(Debug, Error)]
pub enum MembershipError {
    #[error("Reader not found: {0}")]
    NotFound(ReaderId),

    #[error("No tickets available. Please purchase more tickets.")]
    InsufficientTickets,

    #[error("Ticket {0} is not held by this reader")]
    TicketNotHeld(TicketId),

    #[error("No active loan for book {0}")]
    NoMatchingLoan(Isbn),

    #[error("Cannot collect {requested}: outstanding fines are only {outstanding}")]
    FineExceedsBalance { requested: Rupees, outstanding: Rupees },

    #[error("Loan period of {0} days puts the due date out of range")]
    DueDateOutOfRange(i64),

    #[error("Invalid reader details: {0}")]
    InvalidDetails(String),
}
