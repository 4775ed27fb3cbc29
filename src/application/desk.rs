//! Library Desk - 借还台
//!
//! 持有 Library 聚合与所有 Command/Query Handlers，是展示层唯一入口

use std::sync::Arc;

use crate::application::commands::handlers::{
    AddBookHandler, AddBookResponse, AddCopiesHandler, AddCopiesResponse, BorrowBookHandler,
    BorrowBookResponse, CollectFineHandler, PurchaseTicketsHandler, PurchaseTicketsResponse,
    RegisterReaderHandler, RegisterReaderResponse, RegisterStaffHandler, RenewLoanHandler,
    RenewLoanResponse, ReturnBookHandler, ReturnBookResponse,
};
use crate::application::commands::{
    AddBook, AddCopies, BorrowBook, CollectFine, PurchaseTickets, RegisterReader, RegisterStaff,
    RenewLoan, ReturnBook,
};
use crate::application::error::ApplicationError;
use crate::application::policy::LendingPolicy;
use crate::application::ports::{ClockPort, EventPublisherPort};
use crate::application::queries::handlers::{
    BookResponse, GetBookHandler, GetReaderHandler, ListBooksHandler, ListOverdueLoansHandler,
    OverdueLoanResponse, ReaderResponse,
};
use crate::application::queries::{GetBook, GetReader, ListBooks, ListOverdueLoans};
use crate::domain::staff::{FineReceipt, StaffId};
use crate::domain::Library;

/// 借还台
pub struct LibraryDesk {
    library: Library,

    // ========== Ports ==========
    pub clock: Arc<dyn ClockPort>,
    pub event_publisher: Arc<dyn EventPublisherPort>,

    // ========== Command Handlers ==========
    pub add_book_handler: AddBookHandler,
    pub add_copies_handler: AddCopiesHandler,
    pub register_reader_handler: RegisterReaderHandler,
    pub register_staff_handler: RegisterStaffHandler,
    pub purchase_tickets_handler: PurchaseTicketsHandler,
    pub borrow_book_handler: BorrowBookHandler,
    pub return_book_handler: ReturnBookHandler,
    pub renew_loan_handler: RenewLoanHandler,
    pub collect_fine_handler: CollectFineHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub list_books_handler: ListBooksHandler,
    pub get_reader_handler: GetReaderHandler,
    pub list_overdue_loans_handler: ListOverdueLoansHandler,
}

impl LibraryDesk {
    pub fn new(
        policy: LendingPolicy,
        clock: Arc<dyn ClockPort>,
        event_publisher: Arc<dyn EventPublisherPort>,
    ) -> Self {
        Self {
            library: Library::new(),
            clock: clock.clone(),
            event_publisher: event_publisher.clone(),

            add_book_handler: AddBookHandler::new(
                clock.clone(),
                event_publisher.clone(),
                policy.clone(),
            ),
            add_copies_handler: AddCopiesHandler::new(event_publisher.clone(), policy.clone()),
            register_reader_handler: RegisterReaderHandler::new(
                clock.clone(),
                event_publisher.clone(),
                policy.clone(),
            ),
            register_staff_handler: RegisterStaffHandler::new(event_publisher.clone()),
            purchase_tickets_handler: PurchaseTicketsHandler::new(event_publisher.clone()),
            borrow_book_handler: BorrowBookHandler::new(
                clock.clone(),
                event_publisher.clone(),
                policy.clone(),
            ),
            return_book_handler: ReturnBookHandler::new(
                clock.clone(),
                event_publisher.clone(),
                policy.clone(),
            ),
            renew_loan_handler: RenewLoanHandler::new(
                clock.clone(),
                event_publisher.clone(),
                policy.clone(),
            ),
            collect_fine_handler: CollectFineHandler::new(clock.clone(), event_publisher.clone()),

            get_book_handler: GetBookHandler::new(),
            list_books_handler: ListBooksHandler::new(),
            get_reader_handler: GetReaderHandler::new(),
            list_overdue_loans_handler: ListOverdueLoansHandler::new(clock, policy.fines),
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    // Commands
    pub fn add_book(&mut self, command: AddBook) -> Result<AddBookResponse, ApplicationError> {
        self.add_book_handler.handle(&mut self.library, command)
    }

    pub fn add_copies(&mut self, command: AddCopies) -> Result<AddCopiesResponse, ApplicationError> {
        self.add_copies_handler.handle(&mut self.library, command)
    }

    pub fn register_reader(
        &mut self,
        command: RegisterReader,
    ) -> Result<RegisterReaderResponse, ApplicationError> {
        self.register_reader_handler.handle(&mut self.library, command)
    }

    pub fn register_staff(&mut self, command: RegisterStaff) -> Result<StaffId, ApplicationError> {
        self.register_staff_handler.handle(&mut self.library, command)
    }

    pub fn purchase_tickets(
        &mut self,
        command: PurchaseTickets,
    ) -> Result<PurchaseTicketsResponse, ApplicationError> {
        self.purchase_tickets_handler.handle(&mut self.library, command)
    }

    pub fn borrow_book(&mut self, command: BorrowBook) -> Result<BorrowBookResponse, ApplicationError> {
        self.borrow_book_handler.handle(&mut self.library, command)
    }

    pub fn return_book(&mut self, command: ReturnBook) -> Result<ReturnBookResponse, ApplicationError> {
        self.return_book_handler.handle(&mut self.library, command)
    }

    pub fn renew_loan(&mut self, command: RenewLoan) -> Result<RenewLoanResponse, ApplicationError> {
        self.renew_loan_handler.handle(&mut self.library, command)
    }

    pub fn collect_fine(&mut self, command: CollectFine) -> Result<FineReceipt, ApplicationError> {
        self.collect_fine_handler.handle(&mut self.library, command)
    }

    // Queries
    pub fn get_book(&self, query: GetBook) -> Result<BookResponse, ApplicationError> {
        self.get_book_handler.handle(&self.library, query)
    }

    pub fn list_books(&self) -> Vec<BookResponse> {
        self.list_books_handler.handle(&self.library, ListBooks)
    }

    pub fn get_reader(&self, query: GetReader) -> Result<ReaderResponse, ApplicationError> {
        self.get_reader_handler.handle(&self.library, query)
    }

    pub fn list_overdue_loans(&self) -> Vec<OverdueLoanResponse> {
        self.list_overdue_loans_handler
            .handle(&self.library, ListOverdueLoans)
    }
}
