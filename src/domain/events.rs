//! Library Events - 叙述事件
//!
//! 领域操作不直接输出，而是产生事件，由展示层渲染

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalogue::{AccessionNumber, Isbn};
use crate::domain::fines::Rupees;
use crate::domain::membership::ReaderId;
use crate::domain::staff::StaffId;

/// 图书馆事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum LibraryEvent {
    /// 新书入库
    BookAdded {
        isbn: Isbn,
        title: String,
        copies: usize,
    },
    /// 追加副本
    CopiesAdded {
        isbn: Isbn,
        title: String,
        copies: usize,
        total_copies: usize,
    },
    /// 读者注册
    ReaderRegistered {
        reader_id: ReaderId,
        name: String,
        tickets: u32,
    },
    /// 馆员登记
    StaffRegistered { staff_id: StaffId, name: String },
    /// 购买借书证
    TicketsPurchased {
        reader_id: ReaderId,
        name: String,
        count: u32,
        available: u32,
    },
    /// 借出
    BookBorrowed {
        reader_id: ReaderId,
        name: String,
        isbn: Isbn,
        title: String,
        accession_number: AccessionNumber,
        due_at: DateTime<Utc>,
    },
    /// 归还
    BookReturned {
        reader_id: ReaderId,
        name: String,
        isbn: Isbn,
        title: String,
        accession_number: AccessionNumber,
        days_late: u64,
    },
    /// 逾期罚款（仅金额大于 0 时产生）
    FineAssessed {
        reader_id: ReaderId,
        days_late: u64,
        amount: Rupees,
    },
    /// 续借
    LoanRenewed {
        reader_id: ReaderId,
        name: String,
        title: String,
        due_at: DateTime<Utc>,
    },
    /// 收取罚款
    FineCollected {
        staff_id: StaffId,
        reader_id: ReaderId,
        amount: Rupees,
        remaining: Rupees,
    },
    /// 操作被拒绝（配额不足、无可借副本、无对应借阅等）
    OperationRefused { operation: String, reason: String },
}

impl LibraryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LibraryEvent::BookAdded { .. } => "book_added",
            LibraryEvent::CopiesAdded { .. } => "copies_added",
            LibraryEvent::ReaderRegistered { .. } => "reader_registered",
            LibraryEvent::StaffRegistered { .. } => "staff_registered",
            LibraryEvent::TicketsPurchased { .. } => "tickets_purchased",
            LibraryEvent::BookBorrowed { .. } => "book_borrowed",
            LibraryEvent::BookReturned { .. } => "book_returned",
            LibraryEvent::FineAssessed { .. } => "fine_assessed",
            LibraryEvent::LoanRenewed { .. } => "loan_renewed",
            LibraryEvent::FineCollected { .. } => "fine_collected",
            LibraryEvent::OperationRefused { .. } => "operation_refused",
        }
    }
}

impl std::fmt::Display for LibraryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryEvent::BookAdded { title, copies, .. } => {
                write!(f, "Added {} copies of book: {}", copies, title)
            }
            LibraryEvent::CopiesAdded {
                title,
                copies,
                total_copies,
                ..
            } => write!(
                f,
                "Added {} more copies of book: {} ({} in total)",
                copies, title, total_copies
            ),
            LibraryEvent::ReaderRegistered { name, tickets, .. } => {
                write!(f, "Registered reader {} with {} ticket(s)", name, tickets)
            }
            LibraryEvent::StaffRegistered { name, .. } => {
                write!(f, "{} is on duty at the library desk", name)
            }
            LibraryEvent::TicketsPurchased {
                name,
                count,
                available,
                ..
            } => write!(
                f,
                "{} purchased {} additional ticket(s), {} available",
                name, count, available
            ),
            LibraryEvent::BookBorrowed {
                name,
                title,
                accession_number,
                due_at,
                ..
            } => write!(
                f,
                "{} borrowed {} (copy {}, due {})",
                name,
                title,
                accession_number,
                due_at.format("%Y-%m-%d")
            ),
            LibraryEvent::BookReturned { name, title, .. } => {
                write!(f, "{} returned {}", name, title)
            }
            LibraryEvent::FineAssessed { amount, .. } => {
                write!(f, "Fine for late return: {}", amount)
            }
            LibraryEvent::LoanRenewed {
                name, title, due_at, ..
            } => write!(
                f,
                "{} renewed {} until {}",
                name,
                title,
                due_at.format("%Y-%m-%d")
            ),
            LibraryEvent::FineCollected { amount, .. } => {
                write!(f, "Collected fine of {}", amount)
            }
            LibraryEvent::OperationRefused { reason, .. } => write!(f, "{}", reason),
        }
    }
}
