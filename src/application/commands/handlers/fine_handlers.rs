//! Fine Command Handlers

use std::sync::Arc;

use crate::application::commands::CollectFine;
use crate::application::error::ApplicationError;
use crate::application::ports::{ClockPort, EventPublisherPort};
use crate::domain::staff::FineReceipt;
use crate::domain::{Library, LibraryEvent, Rupees};

use super::refuse;

/// CollectFine Handler - 馆员收取罚款
pub struct CollectFineHandler {
    clock: Arc<dyn ClockPort>,
    publisher: Arc<dyn EventPublisherPort>,
}

impl CollectFineHandler {
    pub fn new(clock: Arc<dyn ClockPort>, publisher: Arc<dyn EventPublisherPort>) -> Self {
        Self { clock, publisher }
    }

    pub fn handle(
        &self,
        library: &mut Library,
        command: CollectFine,
    ) -> Result<FineReceipt, ApplicationError> {
        self.execute(library, command)
            .map_err(|e| refuse(self.publisher.as_ref(), "collect_fine", e))
    }

    fn execute(
        &self,
        library: &mut Library,
        command: CollectFine,
    ) -> Result<FineReceipt, ApplicationError> {
        if command.amount == 0 {
            return Err(ApplicationError::validation("fine amount must be greater than 0"));
        }

        let staff = library.staff_member(&command.staff_id)?.clone();
        let receipt = staff.collect_fine(
            library,
            &command.reader_id,
            Rupees::new(command.amount),
            self.clock.now(),
        )?;

        tracing::info!(
            staff_id = %receipt.staff_id,
            reader_id = %receipt.reader_id,
            amount = receipt.amount.amount(),
            remaining = receipt.remaining.amount(),
            "Fine collected"
        );

        self.publisher.publish(LibraryEvent::FineCollected {
            staff_id: receipt.staff_id,
            reader_id: receipt.reader_id,
            amount: receipt.amount,
            remaining: receipt.remaining,
        });

        Ok(receipt)
    }
}
