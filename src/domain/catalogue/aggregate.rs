//! Catalogue Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccessionNumber, Author, BookCopy, CatalogueError, CopyStatus, Isbn, Title};

/// Book 聚合根
///
/// 不变量:
/// - ISBN 在目录内唯一（由 Library 保证）
/// - 副本只追加，不删除，顺序不变
/// - 副本的 isbn 与所属 Book 一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    isbn: Isbn,
    title: Title,
    author: Author,
    copies: Vec<BookCopy>,
    catalogued_at: DateTime<Utc>,
}

impl Book {
    pub fn new(isbn: Isbn, title: Title, author: Author, catalogued_at: DateTime<Utc>) -> Self {
        Self {
            isbn,
            title,
            author,
            copies: Vec::new(),
            catalogued_at,
        }
    }

    /// 追加一个副本
    pub fn add_copy(&mut self, accession_number: AccessionNumber) {
        self.copies
            .push(BookCopy::new(self.isbn.clone(), accession_number));
    }

    /// 第一个可借副本
    pub fn first_available_copy(&self) -> Option<&BookCopy> {
        self.copies.iter().find(|c| c.is_available())
    }

    /// 标记副本借出
    pub fn check_out(&mut self, accession_number: &AccessionNumber) -> Result<(), CatalogueError> {
        let copy = self.copy_mut(accession_number)?;
        if !copy.is_available() {
            return Err(CatalogueError::NoCopyAvailable(copy.isbn().clone()));
        }
        copy.set_status(CopyStatus::OnLoan);
        Ok(())
    }

    /// 标记副本归还
    pub fn check_in(&mut self, accession_number: &AccessionNumber) -> Result<(), CatalogueError> {
        let copy = self.copy_mut(accession_number)?;
        if copy.is_available() {
            return Err(CatalogueError::CopyNotOnLoan(accession_number.clone()));
        }
        copy.set_status(CopyStatus::Available);
        Ok(())
    }

    fn copy_mut(&mut self, accession_number: &AccessionNumber) -> Result<&mut BookCopy, CatalogueError> {
        self.copies
            .iter_mut()
            .find(|c| c.accession_number() == accession_number)
            .ok_or_else(|| CatalogueError::CopyNotFound(accession_number.clone()))
    }

    // Getters
    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn copies(&self) -> &[BookCopy] {
        &self.copies
    }

    pub fn copy_count(&self) -> usize {
        self.copies.len()
    }

    pub fn available_count(&self) -> usize {
        self.copies.iter().filter(|c| c.is_available()).count()
    }

    pub fn catalogued_at(&self) -> DateTime<Utc> {
        self.catalogued_at
    }
}
