//! Membership Context - Aggregate Root

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{LibraryTicket, MembershipError, ReaderId, TicketId};
use crate::domain::catalogue::Isbn;
use crate::domain::fines::Rupees;
use crate::domain::identity::Identity;

/// Reader 聚合根
///
/// 不变量:
/// - active_tickets.len() + available_tickets == tickets_issued
/// - available_tickets 为 0 时不能借书
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reader {
    id: ReaderId,
    identity: Identity,
    tickets_issued: u32,
    available_tickets: u32,
    active_tickets: Vec<LibraryTicket>,
    outstanding_fines: Rupees,
    registered_at: DateTime<Utc>,
}

impl Reader {
    /// 注册新读者，初始发放 initial_tickets 张借书证
    pub fn new(identity: Identity, initial_tickets: u32, registered_at: DateTime<Utc>) -> Self {
        Self {
            id: ReaderId::new(),
            identity,
            tickets_issued: initial_tickets,
            available_tickets: initial_tickets,
            active_tickets: Vec::new(),
            outstanding_fines: Rupees::ZERO,
            registered_at,
        }
    }

    /// 用一张借书证换取借阅凭证
    pub fn borrow_ticket(&mut self, ticket: LibraryTicket) -> Result<(), MembershipError> {
        if self.available_tickets == 0 {
            return Err(MembershipError::InsufficientTickets);
        }
        self.available_tickets -= 1;
        self.active_tickets.push(ticket);
        Ok(())
    }

    /// 归还凭证，恢复一张借书证
    pub fn return_ticket(&mut self, ticket_id: &TicketId) -> Result<LibraryTicket, MembershipError> {
        let position = self
            .active_tickets
            .iter()
            .position(|t| t.id() == ticket_id)
            .ok_or_else(|| MembershipError::TicketNotHeld(*ticket_id))?;
        let ticket = self.active_tickets.remove(position);
        self.available_tickets += 1;
        Ok(ticket)
    }

    /// 续借：截止日期改为 now + 借期
    pub fn renew_ticket(
        &mut self,
        ticket_id: &TicketId,
        now: DateTime<Utc>,
        loan_period: Duration,
    ) -> Result<&LibraryTicket, MembershipError> {
        let ticket = self
            .active_tickets
            .iter_mut()
            .find(|t| t.id() == ticket_id)
            .ok_or_else(|| MembershipError::TicketNotHeld(*ticket_id))?;
        ticket.extend(now, loan_period)?;
        Ok(ticket)
    }

    /// 购买额外借书证，无上限
    pub fn purchase_additional_tickets(&mut self, count: u32) {
        self.tickets_issued = self.tickets_issued.saturating_add(count);
        self.available_tickets = self.available_tickets.saturating_add(count);
    }

    /// 记入逾期罚款
    pub fn accrue_fine(&mut self, amount: Rupees) {
        self.outstanding_fines = self.outstanding_fines.saturating_add(amount);
    }

    /// 缴纳罚款，不能超过欠款
    pub fn settle_fine(&mut self, amount: Rupees) -> Result<Rupees, MembershipError> {
        let remaining = self.outstanding_fines.checked_sub(amount).ok_or(
            MembershipError::FineExceedsBalance {
                requested: amount,
                outstanding: self.outstanding_fines,
            },
        )?;
        self.outstanding_fines = remaining;
        Ok(remaining)
    }

    /// 该书的第一条在借凭证
    pub fn ticket_for(&self, isbn: &Isbn) -> Option<&LibraryTicket> {
        self.active_tickets.iter().find(|t| t.isbn() == isbn)
    }

    // Getters
    pub fn id(&self) -> &ReaderId {
        &self.id
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name().as_str()
    }

    pub fn tickets_issued(&self) -> u32 {
        self.tickets_issued
    }

    pub fn available_tickets(&self) -> u32 {
        self.available_tickets
    }

    pub fn active_tickets(&self) -> &[LibraryTicket] {
        &self.active_tickets
    }

    pub fn outstanding_fines(&self) -> Rupees {
        self.outstanding_fines
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::AccessionNumber;

    fn reader(tickets: u32) -> Reader {
        Reader::new(Identity::parse("Vineesha", "123 Street, City").unwrap(), tickets, Utc::now())
    }

    fn ticket(serial: usize) -> LibraryTicket {
        LibraryTicket::new(
            Isbn::new("12345").unwrap(),
            AccessionNumber::sequential("ACC", serial),
            Utc::now(),
            Duration::days(14),
        )
        .unwrap()
    }

    fn assert_counters_consistent(reader: &Reader) {
        assert_eq!(
            reader.active_tickets().len() as u32 + reader.available_tickets(),
            reader.tickets_issued()
        );
    }

    #[test]
    fn test_borrow_consumes_quota() {
        let mut reader = reader(1);
        reader.borrow_ticket(ticket(1)).unwrap();
        assert_eq!(reader.available_tickets(), 0);
        assert_eq!(reader.active_tickets().len(), 1);
        assert_counters_consistent(&reader);
    }

    #[test]
    fn test_borrow_without_quota_changes_nothing() {
        let mut reader = reader(0);
        let result = reader.borrow_ticket(ticket(1));
        assert!(matches!(result, Err(MembershipError::InsufficientTickets)));
        assert!(reader.active_tickets().is_empty());
        assert_eq!(reader.available_tickets(), 0);
    }

    #[test]
    fn test_return_restores_quota() {
        let mut reader = reader(2);
        let t = ticket(1);
        let id = *t.id();
        reader.borrow_ticket(t).unwrap();
        reader.borrow_ticket(ticket(2)).unwrap();
        assert_eq!(reader.available_tickets(), 0);

        let returned = reader.return_ticket(&id).unwrap();
        assert_eq!(returned.accession_number().as_str(), "ACC1");
        assert_eq!(reader.available_tickets(), 1);
        assert_counters_consistent(&reader);
    }

    #[test]
    fn test_return_unknown_ticket_changes_nothing() {
        let mut reader = reader(1);
        reader.borrow_ticket(ticket(1)).unwrap();
        let stranger = ticket(9);

        let result = reader.return_ticket(stranger.id());
        assert!(matches!(result, Err(MembershipError::TicketNotHeld(_))));
        assert_eq!(reader.available_tickets(), 0);
        assert_eq!(reader.active_tickets().len(), 1);
    }

    #[test]
    fn test_purchase_additional_tickets() {
        let mut reader = reader(1);
        reader.purchase_additional_tickets(2);
        assert_eq!(reader.available_tickets(), 3);
        assert_eq!(reader.tickets_issued(), 3);
        assert_counters_consistent(&reader);
    }

    #[test]
    fn test_quota_never_negative_over_sequence() {
        let mut reader = reader(1);
        let mut held = Vec::new();
        for serial in 1..=5 {
            let t = ticket(serial);
            let id = *t.id();
            if reader.borrow_ticket(t).is_ok() {
                held.push(id);
            }
            if serial == 3 {
                reader.purchase_additional_tickets(1);
            }
            assert_counters_consistent(&reader);
        }
        for id in held {
            reader.return_ticket(&id).unwrap();
            assert_counters_consistent(&reader);
        }
        assert_eq!(reader.available_tickets(), 2);
    }

    #[test]
    fn test_fine_ledger() {
        let mut reader = reader(1);
        reader.accrue_fine(Rupees::new(3));
        assert!(matches!(
            reader.settle_fine(Rupees::new(5)),
            Err(MembershipError::FineExceedsBalance { .. })
        ));
        assert_eq!(reader.outstanding_fines(), Rupees::new(3));

        let remaining = reader.settle_fine(Rupees::new(2)).unwrap();
        assert_eq!(remaining, Rupees::new(1));
    }

    #[test]
    fn test_renew_ticket() {
        let mut reader = reader(1);
        let t = ticket(1);
        let id = *t.id();
        let original_due = t.due_at();
        reader.borrow_ticket(t).unwrap();

        let later = original_due - Duration::days(1);
        let renewed = reader.renew_ticket(&id, later, Duration::days(14)).unwrap();
        assert_eq!(renewed.due_at(), later + Duration::days(14));
    }
}
