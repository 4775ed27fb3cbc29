//! Catalogue Query Handlers

use chrono::{DateTime, Utc};

use crate::application::error::ApplicationError;
use crate::application::queries::{GetBook, ListBooks};
use crate::domain::catalogue::{Book, BookCopy, Isbn};
use crate::domain::Library;

// ============================================================================
// Response DTOs
// ============================================================================

/// 副本响应
#[derive(Debug, Clone)]
pub struct CopyResponse {
    pub accession_number: String,
    pub status: String,
}

impl From<&BookCopy> for CopyResponse {
    fn from(copy: &BookCopy) -> Self {
        Self {
            accession_number: copy.accession_number().to_string(),
            status: copy.status().as_str().to_string(),
        }
    }
}

/// 书目详情响应
#[derive(Debug, Clone)]
pub struct BookResponse {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub total_copies: usize,
    pub available_copies: usize,
    pub copies: Vec<CopyResponse>,
    pub catalogued_at: DateTime<Utc>,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            total_copies: book.copy_count(),
            available_copies: book.available_count(),
            copies: book.copies().iter().map(CopyResponse::from).collect(),
            catalogued_at: book.catalogued_at(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetBook Handler
#[derive(Debug, Default)]
pub struct GetBookHandler;

impl GetBookHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, library: &Library, query: GetBook) -> Result<BookResponse, ApplicationError> {
        let isbn = Isbn::new(query.isbn).map_err(ApplicationError::validation)?;
        let book = library.book(&isbn)?;
        Ok(BookResponse::from(book))
    }
}

/// ListBooks Handler（按入库顺序）
#[derive(Debug, Default)]
pub struct ListBooksHandler;

impl ListBooksHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, library: &Library, _query: ListBooks) -> Vec<BookResponse> {
        library.books().iter().map(BookResponse::from).collect()
    }
}
