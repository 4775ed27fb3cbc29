//! Catalogue Command Handlers

use std::sync::Arc;

use crate::application::commands::{AddBook, AddCopies};
use crate::application::error::ApplicationError;
use crate::application::policy::LendingPolicy;
use crate::application::ports::{ClockPort, EventPublisherPort};
use crate::domain::catalogue::{AccessionNumber, Author, Isbn, Title};
use crate::domain::staff::NewBook;
use crate::domain::{Library, LibraryEvent};

use super::refuse;

// ============================================================================
// AddBook
// ============================================================================

/// 入库响应
#[derive(Debug, Clone)]
pub struct AddBookResponse {
    pub isbn: Isbn,
    pub title: String,
    pub accession_numbers: Vec<AccessionNumber>,
}

/// AddBook Handler - 馆员新书入库
pub struct AddBookHandler {
    clock: Arc<dyn ClockPort>,
    publisher: Arc<dyn EventPublisherPort>,
    policy: LendingPolicy,
}

impl AddBookHandler {
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
        command: AddBook,
    ) -> Result<AddBookResponse, ApplicationError> {
        self.execute(library, command)
            .map_err(|e| refuse(self.publisher.as_ref(), "add_book", e))
    }

    fn execute(
        &self,
        library: &mut Library,
        command: AddBook,
    ) -> Result<AddBookResponse, ApplicationError> {
        let new_book = NewBook {
            isbn: Isbn::new(command.isbn).map_err(ApplicationError::validation)?,
            title: Title::new(command.title).map_err(ApplicationError::validation)?,
            author: Author::new(command.author).map_err(ApplicationError::validation)?,
        };

        let staff = library.staff_member(&command.staff_id)?.clone();
        let book = staff.add_book(
            library,
            new_book,
            command.copies,
            &self.policy.accession_prefix,
            self.clock.now(),
        )?;

        let response = AddBookResponse {
            isbn: book.isbn().clone(),
            title: book.title().to_string(),
            accession_numbers: book
                .copies()
                .iter()
                .map(|c| c.accession_number().clone())
                .collect(),
        };

        tracing::info!(
            staff_id = %staff.id(),
            isbn = %response.isbn,
            title = %response.title,
            copies = response.accession_numbers.len(),
            "Book added"
        );

        self.publisher.publish(LibraryEvent::BookAdded {
            isbn: response.isbn.clone(),
            title: response.title.clone(),
            copies: response.accession_numbers.len(),
        });

        Ok(response)
    }
}

// ============================================================================
// AddCopies
// ============================================================================

/// 追加副本响应
#[derive(Debug, Clone)]
pub struct AddCopiesResponse {
    pub isbn: Isbn,
    pub added: Vec<AccessionNumber>,
    pub total_copies: usize,
}

/// AddCopies Handler
pub struct AddCopiesHandler {
    publisher: Arc<dyn EventPublisherPort>,
    policy: LendingPolicy,
}

impl AddCopiesHandler {
    pub fn new(publisher: Arc<dyn EventPublisherPort>, policy: LendingPolicy) -> Self {
        Self { publisher, policy }
    }

    pub fn handle(
        &self,
        library: &mut Library,
        command: AddCopies,
    ) -> Result<AddCopiesResponse, ApplicationError> {
        self.execute(library, command)
            .map_err(|e| refuse(self.publisher.as_ref(), "add_copies", e))
    }

    fn execute(
        &self,
        library: &mut Library,
        command: AddCopies,
    ) -> Result<AddCopiesResponse, ApplicationError> {
        if command.copies == 0 {
            return Err(ApplicationError::validation("copies must be greater than 0"));
        }
        let isbn = Isbn::new(command.isbn).map_err(ApplicationError::validation)?;

        let staff = library.staff_member(&command.staff_id)?.clone();
        let book = staff.add_copies(library, &isbn, command.copies, &self.policy.accession_prefix)?;

        let first_new = book.copy_count() - command.copies;
        let added: Vec<AccessionNumber> = book.copies()[first_new..]
            .iter()
            .map(|c| c.accession_number().clone())
            .collect();
        let total_copies = book.copy_count();
        let title = book.title().to_string();

        tracing::info!(
            staff_id = %staff.id(),
            isbn = %isbn,
            added = added.len(),
            total_copies = total_copies,
            "Copies added"
        );

        self.publisher.publish(LibraryEvent::CopiesAdded {
            isbn: isbn.clone(),
            title,
            copies: added.len(),
            total_copies,
        });

        Ok(AddCopiesResponse {
            isbn,
            added,
            total_copies,
        })
    }
}
