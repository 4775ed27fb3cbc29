//! Loan Command Handlers

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::commands::{BorrowBook, RenewLoan, ReturnBook};
use crate::application::error::ApplicationError;
use crate::application::policy::{LendingPolicy, MAX_LOAN_PERIOD_DAYS};
use crate::application::ports::{ClockPort, EventPublisherPort};
use crate::domain::catalogue::{AccessionNumber, Isbn};
use crate::domain::membership::TicketId;
use crate::domain::{Library, LibraryEvent, Rupees};

use super::refuse;

fn parse_isbn(raw: String) -> Result<Isbn, ApplicationError> {
    Isbn::new(raw).map_err(ApplicationError::validation)
}

fn validate_period(days: Option<u32>) -> Result<(), ApplicationError> {
    match days {
        Some(0) => Err(ApplicationError::validation("loan period must be at least one day")),
        Some(d) if d > MAX_LOAN_PERIOD_DAYS => Err(ApplicationError::validation(format!(
            "loan period cannot exceed {} days",
            MAX_LOAN_PERIOD_DAYS
        ))),
        _ => Ok(()),
    }
}

// ============================================================================
// BorrowBook
// ============================================================================

/// 借书响应
#[derive(Debug, Clone)]
pub struct BorrowBookResponse {
    pub ticket_id: TicketId,
    pub accession_number: AccessionNumber,
    pub due_at: DateTime<Utc>,
    pub available_tickets: u32,
}

/// BorrowBook Handler
pub struct BorrowBookHandler {
    clock: Arc<dyn ClockPort>,
    publisher: Arc<dyn EventPublisherPort>,
    policy: LendingPolicy,
}

impl BorrowBookHandler {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        publisher: Arc<dyn EventPublisherPort>,
        policy: LendingPolicy,
    ) -> Self {
        Self {
            clock,
            publisher,
            policy,
        }
    }

    pub fn handle(
        &self,
        library: &mut Library,
        command: BorrowBook,
    ) -> Result<BorrowBookResponse, ApplicationError> {
        self.execute(library, command)
            .map_err(|e| refuse(self.publisher.as_ref(), "borrow_book", e))
    }

    fn execute(
        &self,
        library: &mut Library,
        command: BorrowBook,
    ) -> Result<BorrowBookResponse, ApplicationError> {
        validate_period(command.loan_period_days)?;
        let isbn = parse_isbn(command.isbn)?;
        let loan_period = self.policy.loan_period_or(command.loan_period_days);
        let now = self.clock.now();

        let ticket = library.borrow_book(&command.reader_id, &isbn, now, loan_period)?;

        let reader = library.reader(&command.reader_id)?;
        let title = library.book(&isbn)?.title().to_string();

        tracing::info!(
            reader_id = %command.reader_id,
            isbn = %isbn,
            accession_number = %ticket.accession_number(),
            due_at = %ticket.due_at(),
            "Book borrowed"
        );

        self.publisher.publish(LibraryEvent::BookBorrowed {
            reader_id: command.reader_id,
            name: reader.name().to_string(),
            isbn,
            title,
            accession_number: ticket.accession_number().clone(),
            due_at: ticket.due_at(),
        });

        Ok(BorrowBookResponse {
            ticket_id: *ticket.id(),
            accession_number: ticket.accession_number().clone(),
            due_at: ticket.due_at(),
            available_tickets: reader.available_tickets(),
        })
    }
}

// ============================================================================
// ReturnBook
// ============================================================================

/// 还书响应
#[derive(Debug, Clone)]
pub struct ReturnBookResponse {
    pub accession_number: AccessionNumber,
    pub days_late: u64,
    pub fine: Rupees,
    pub available_tickets: u32,
    pub outstanding_fines: Rupees,
}

/// ReturnBook Handler
pub struct ReturnBookHandler {
    clock: Arc<dyn ClockPort>,
    publisher: Arc<dyn EventPublisherPort>,
    policy: LendingPolicy,
}

impl ReturnBookHandler {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        publisher: Arc<dyn EventPublisherPort>,
        policy: LendingPolicy,
    ) -> Self {
        Self {
            clock,
            publisher,
            policy,
        }
    }

    pub fn handle(
        &self,
        library: &mut Library,
        command: ReturnBook,
    ) -> Result<ReturnBookResponse, ApplicationError> {
        self.execute(library, command)
            .map_err(|e| refuse(self.publisher.as_ref(), "return_book", e))
    }

    fn execute(
        &self,
        library: &mut Library,
        command: ReturnBook,
    ) -> Result<ReturnBookResponse, ApplicationError> {
        let isbn = parse_isbn(command.isbn)?;
        let now = self.clock.now();

        let outcome = library.return_book(&command.reader_id, &isbn, now, &self.policy.fines)?;

        let reader = library.reader(&command.reader_id)?;
        let title = library.book(&isbn)?.title().to_string();
        let assessment = outcome.assessment;

        tracing::info!(
            reader_id = %command.reader_id,
            isbn = %isbn,
            accession_number = %outcome.ticket.accession_number(),
            days_late = assessment.days_late,
            fine = assessment.amount.amount(),
            "Book returned"
        );

        self.publisher.publish(LibraryEvent::BookReturned {
            reader_id: command.reader_id,
            name: reader.name().to_string(),
            isbn,
            title,
            accession_number: outcome.ticket.accession_number().clone(),
            days_late: assessment.days_late,
        });

        if !assessment.amount.is_zero() {
            self.publisher.publish(LibraryEvent::FineAssessed {
                reader_id: command.reader_id,
                days_late: assessment.days_late,
                amount: assessment.amount,
            });
        }

        Ok(ReturnBookResponse {
            accession_number: outcome.ticket.accession_number().clone(),
            days_late: assessment.days_late,
            fine: assessment.amount,
            available_tickets: reader.available_tickets(),
            outstanding_fines: reader.outstanding_fines(),
        })
    }
}

// ============================================================================
// RenewLoan
// ============================================================================

/// 续借响应
#[derive(Debug, Clone)]
pub struct RenewLoanResponse {
    pub ticket_id: TicketId,
    pub due_at: DateTime<Utc>,
}

/// RenewLoan Handler
pub struct RenewLoanHandler {
    clock: Arc<dyn ClockPort>,
    publisher: Arc<dyn EventPublisherPort>,
    policy: LendingPolicy,
}

impl RenewLoanHandler {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        publisher: Arc<dyn EventPublisherPort>,
        policy: LendingPolicy,
    ) -> Self {
        Self {
            clock,
            publisher,
            policy,
        }
    }

    pub fn handle(
        &self,
        library: &mut Library,
        command: RenewLoan,
    ) -> Result<RenewLoanResponse, ApplicationError> {
        self.execute(library, command)
            .map_err(|e| refuse(self.publisher.as_ref(), "renew_loan", e))
    }

    fn execute(
        &self,
        library: &mut Library,
        command: RenewLoan,
    ) -> Result<RenewLoanResponse, ApplicationError> {
        validate_period(command.loan_period_days)?;
        let isbn = parse_isbn(command.isbn)?;
        let loan_period = self.policy.loan_period_or(command.loan_period_days);
        let now = self.clock.now();

        let ticket = library.renew_loan(&command.reader_id, &isbn, now, loan_period)?;

        let name = library.reader(&command.reader_id)?.name().to_string();
        let title = library.book(&isbn)?.title().to_string();

        tracing::info!(
            reader_id = %command.reader_id,
            isbn = %isbn,
            due_at = %ticket.due_at(),
            "Loan renewed"
        );

        self.publisher.publish(LibraryEvent::LoanRenewed {
            reader_id: command.reader_id,
            name,
            title,
            due_at: ticket.due_at(),
        });

        Ok(RenewLoanResponse {
            ticket_id: *ticket.id(),
            due_at: ticket.due_at(),
        })
    }
}
