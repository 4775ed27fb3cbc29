//! Catalogue Context - Errors

use thiserror::Error;

use super::{AccessionNumber, Isbn};

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Book not found: {0}")]
    NotFound(Isbn),

    #[error("A book with ISBN {0} is already catalogued")]
    DuplicateIsbn(Isbn),

    #[error("No copies available for this book.")]
    NoCopyAvailable(Isbn),

    #[error("Copy {0} does not belong to this book")]
    CopyNotFound(AccessionNumber),

    #[error("Copy {0} is not on loan")]
    CopyNotOnLoan(AccessionNumber),

    #[error("Invalid ISBN: {0}")]
    InvalidIsbn(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid author: {0}")]
    InvalidAuthor(String),
}
