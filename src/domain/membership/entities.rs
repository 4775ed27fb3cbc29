//! Membership Context - Entities

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{MembershipError, TicketId};
use crate::domain::catalogue::{AccessionNumber, Isbn};
use crate::domain::fines::days_late;

/// 借阅凭证
///
/// 不变量:
/// - due_at = borrowed_at + 借期（续借后 = 续借时间 + 借期）
/// - 通过 isbn + accession_number 引用副本，不持有副本本身
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryTicket {
    id: TicketId,
    isbn: Isbn,
    accession_number: AccessionNumber,
    borrowed_at: DateTime<Utc>,
    due_at: DateTime<Utc>,
}

impl LibraryTicket {
    pub fn new(
        isbn: Isbn,
        accession_number: AccessionNumber,
        borrowed_at: DateTime<Utc>,
        loan_period: Duration,
    ) -> Result<Self, MembershipError> {
        Ok(Self {
            id: TicketId::new(),
            isbn,
            accession_number,
            borrowed_at,
            due_at: due_date(borrowed_at, loan_period)?,
        })
    }

    pub fn id(&self) -> &TicketId {
        &self.id
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn accession_number(&self) -> &AccessionNumber {
        &self.accession_number
    }

    pub fn borrowed_at(&self) -> DateTime<Utc> {
        self.borrowed_at
    }

    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// 至少逾期一整天
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        days_late(self.due_at, now) > 0
    }

    pub(crate) fn extend(
        &mut self,
        now: DateTime<Utc>,
        loan_period: Duration,
    ) -> Result<(), MembershipError> {
        self.due_at = due_date(now, loan_period)?;
        Ok(())
    }
}

fn due_date(from: DateTime<Utc>, loan_period: Duration) -> Result<DateTime<Utc>, MembershipError> {
    from.checked_add_signed(loan_period)
        .ok_or(MembershipError::DueDateOutOfRange(loan_period.num_days()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_due_date_from_loan_period() {
        let borrowed = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let ticket = LibraryTicket::new(
            Isbn::new("12345").unwrap(),
            AccessionNumber::sequential("ACC", 1),
            borrowed,
            Duration::days(14),
        )
        .unwrap();
        assert_eq!(ticket.due_at(), Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap());
        assert!(!ticket.is_overdue(ticket.due_at() + Duration::hours(23)));
        assert!(ticket.is_overdue(ticket.due_at() + Duration::days(1)));
    }

    #[test]
    fn test_due_date_overflow_is_an_error() {
        let borrowed = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let result = LibraryTicket::new(
            Isbn::new("12345").unwrap(),
            AccessionNumber::sequential("ACC", 1),
            borrowed,
            Duration::days(i64::from(u32::MAX)),
        );
        assert!(matches!(result, Err(MembershipError::DueDateOutOfRange(_))));
    }

    #[test]
    fn test_extend_overflow_keeps_due_date() {
        let borrowed = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let mut ticket = LibraryTicket::new(
            Isbn::new("12345").unwrap(),
            AccessionNumber::sequential("ACC", 1),
            borrowed,
            Duration::days(14),
        )
        .unwrap();
        let due = ticket.due_at();

        assert!(ticket.extend(borrowed, Duration::days(i64::from(u32::MAX))).is_err());
        assert_eq!(ticket.due_at(), due);
    }
}
