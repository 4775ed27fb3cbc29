//! Reader & Staff Command Handlers

use std::sync::Arc;

use crate::application::commands::{PurchaseTickets, RegisterReader, RegisterStaff};
use crate::application::error::ApplicationError;
use crate::application::policy::LendingPolicy;
use crate::application::ports::{ClockPort, EventPublisherPort};
use crate::domain::membership::{Reader, ReaderId};
use crate::domain::staff::{LibraryStaff, StaffId};
use crate::domain::{Identity, Library, LibraryEvent};

use super::refuse;

// ============================================================================
// RegisterReader
// ============================================================================

/// 注册读者响应
#[derive(Debug, Clone)]
pub struct RegisterReaderResponse {
    pub reader_id: ReaderId,
    pub available_tickets: u32,
}

/// RegisterReader Handler
pub struct RegisterReaderHandler {
    clock: Arc<dyn ClockPort>,
    publisher: Arc<dyn EventPublisherPort>,
    policy: LendingPolicy,
}

impl RegisterReaderHandler {
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
        command: RegisterReader,
    ) -> Result<RegisterReaderResponse, ApplicationError> {
        self.execute(library, command)
            .map_err(|e| refuse(self.publisher.as_ref(), "register_reader", e))
    }

    fn execute(
        &self,
        library: &mut Library,
        command: RegisterReader,
    ) -> Result<RegisterReaderResponse, ApplicationError> {
        let identity = Identity::parse(&command.name, &command.address)
            .map_err(ApplicationError::validation)?;
        let tickets = command
            .initial_tickets
            .unwrap_or(self.policy.default_tickets);

        let reader = Reader::new(identity, tickets, self.clock.now());
        let name = reader.name().to_string();
        let reader_id = library.add_reader(reader);

        tracing::info!(reader_id = %reader_id, name = %name, tickets = tickets, "Reader registered");

        self.publisher.publish(LibraryEvent::ReaderRegistered {
            reader_id,
            name,
            tickets,
        });

        Ok(RegisterReaderResponse {
            reader_id,
            available_tickets: tickets,
        })
    }
}

// ============================================================================
// PurchaseTickets
// ============================================================================

/// 购买借书证响应
#[derive(Debug, Clone)]
pub struct PurchaseTicketsResponse {
    pub available_tickets: u32,
    pub tickets_issued: u32,
}

/// PurchaseTickets Handler
pub struct PurchaseTicketsHandler {
    publisher: Arc<dyn EventPublisherPort>,
}

impl PurchaseTicketsHandler {
    pub fn new(publisher: Arc<dyn EventPublisherPort>) -> Self {
        Self { publisher }
    }

    pub fn handle(
        &self,
        library: &mut Library,
        command: PurchaseTickets,
    ) -> Result<PurchaseTicketsResponse, ApplicationError> {
        self.execute(library, command)
            .map_err(|e| refuse(self.publisher.as_ref(), "purchase_tickets", e))
    }

    fn execute(
        &self,
        library: &mut Library,
        command: PurchaseTickets,
    ) -> Result<PurchaseTicketsResponse, ApplicationError> {
        if command.count == 0 {
            return Err(ApplicationError::validation("ticket count must be greater than 0"));
        }

        let reader = library.reader_mut(&command.reader_id)?;
        reader.purchase_additional_tickets(command.count);

        tracing::info!(
            reader_id = %command.reader_id,
            count = command.count,
            available = reader.available_tickets(),
            "Tickets purchased"
        );

        self.publisher.publish(LibraryEvent::TicketsPurchased {
            reader_id: command.reader_id,
            name: reader.name().to_string(),
            count: command.count,
            available: reader.available_tickets(),
        });

        Ok(PurchaseTicketsResponse {
            available_tickets: reader.available_tickets(),
            tickets_issued: reader.tickets_issued(),
        })
    }
}

// ============================================================================
// RegisterStaff
// ============================================================================

/// RegisterStaff Handler
pub struct RegisterStaffHandler {
    publisher: Arc<dyn EventPublisherPort>,
}

impl RegisterStaffHandler {
    pub fn new(publisher: Arc<dyn EventPublisherPort>) -> Self {
        Self { publisher }
    }

    pub fn handle(
        &self,
        library: &mut Library,
        command: RegisterStaff,
    ) -> Result<StaffId, ApplicationError> {
        let identity = Identity::parse(&command.name, &command.address)
            .map_err(ApplicationError::validation)
            .map_err(|e| refuse(self.publisher.as_ref(), "register_staff", e))?;

        let staff = LibraryStaff::new(identity);
        let name = staff.name().to_string();
        let staff_id = library.register_staff(staff);

        tracing::info!(staff_id = %staff_id, name = %name, "Staff registered");

        self.publisher.publish(LibraryEvent::StaffRegistered {
            staff_id,
            name,
        });

        Ok(staff_id)
    }
}
