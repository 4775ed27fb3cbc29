//! Reader Query Handlers

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ClockPort;
use crate::application::queries::{GetReader, ListOverdueLoans};
use crate::domain::membership::{LibraryTicket, Reader, ReaderId};
use crate::domain::{FinePolicy, Library, Rupees};

// ============================================================================
// Response DTOs
// ============================================================================

/// 在借记录响应
#[derive(Debug, Clone)]
pub struct LoanResponse {
    pub ticket_id: String,
    pub isbn: String,
    pub accession_number: String,
    pub borrowed_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

impl From<&LibraryTicket> for LoanResponse {
    fn from(ticket: &LibraryTicket) -> Self {
        Self {
            ticket_id: ticket.id().to_string(),
            isbn: ticket.isbn().to_string(),
            accession_number: ticket.accession_number().to_string(),
            borrowed_at: ticket.borrowed_at(),
            due_at: ticket.due_at(),
        }
    }
}

/// 读者详情响应
#[derive(Debug, Clone)]
pub struct ReaderResponse {
    pub id: ReaderId,
    pub name: String,
    pub address: String,
    pub tickets_issued: u32,
    pub available_tickets: u32,
    pub active_loans: Vec<LoanResponse>,
    pub outstanding_fines: Rupees,
    pub registered_at: DateTime<Utc>,
}

impl From<&Reader> for ReaderResponse {
    fn from(reader: &Reader) -> Self {
        Self {
            id: *reader.id(),
            name: reader.name().to_string(),
            address: reader.identity().address().to_string(),
            tickets_issued: reader.tickets_issued(),
            available_tickets: reader.available_tickets(),
            active_loans: reader.active_tickets().iter().map(LoanResponse::from).collect(),
            outstanding_fines: reader.outstanding_fines(),
            registered_at: reader.registered_at(),
        }
    }
}

/// 逾期借阅响应
#[derive(Debug, Clone)]
pub struct OverdueLoanResponse {
    pub reader_id: ReaderId,
    pub reader_name: String,
    pub loan: LoanResponse,
    pub days_late: i64,
    /// 若此刻归还应缴的罚款
    pub fine_to_date: Rupees,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetReader Handler
#[derive(Debug, Default)]
pub struct GetReaderHandler;

impl GetReaderHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, library: &Library, query: GetReader) -> Result<ReaderResponse, ApplicationError> {
        let reader = library.reader(&query.reader_id)?;
        Ok(ReaderResponse::from(reader))
    }
}

/// ListOverdueLoans Handler
pub struct ListOverdueLoansHandler {
    clock: Arc<dyn ClockPort>,
    fines: FinePolicy,
}

impl ListOverdueLoansHandler {
    pub fn new(clock: Arc<dyn ClockPort>, fines: FinePolicy) -> Self {
        Self { clock, fines }
    }

    pub fn handle(&self, library: &Library, _query: ListOverdueLoans) -> Vec<OverdueLoanResponse> {
        let now = self.clock.now();
        library
            .overdue_loans(now)
            .into_iter()
            .map(|overdue| OverdueLoanResponse {
                reader_id: *overdue.reader.id(),
                reader_name: overdue.reader.name().to_string(),
                loan: LoanResponse::from(overdue.ticket),
                days_late: overdue.days_late,
                fine_to_date: self.fines.fine_for_days(overdue.days_late),
            })
            .collect()
    }
}
