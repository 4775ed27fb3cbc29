//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口（Clock、EventPublisher）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - desk: 借还台，聚合全部 Handler
//! - error: 应用层错误定义

pub mod commands;
pub mod desk;
pub mod error;
pub mod policy;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Catalogue commands
    AddBook,
    AddCopies,
    // Fine commands
    CollectFine,
    // Loan commands
    BorrowBook,
    RenewLoan,
    ReturnBook,
    // Reader commands
    PurchaseTickets,
    RegisterReader,
    RegisterStaff,
    // Handlers
    handlers::{
        AddBookHandler, AddCopiesHandler, BorrowBookHandler, CollectFineHandler,
        PurchaseTicketsHandler, RegisterReaderHandler, RegisterStaffHandler, RenewLoanHandler,
        ReturnBookHandler,
    },
};

pub use desk::LibraryDesk;
pub use error::ApplicationError;
pub use policy::{LendingPolicy, MAX_LOAN_PERIOD_DAYS};
pub use ports::{ClockPort, EventPublisherPort};

pub use queries::{
    GetBook,
    GetReader,
    ListBooks,
    ListOverdueLoans,
    // Handlers
    handlers::{GetBookHandler, GetReaderHandler, ListBooksHandler, ListOverdueLoansHandler},
};
