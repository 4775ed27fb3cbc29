//! Staff Context - Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StaffId;
use crate::domain::catalogue::{AccessionNumber, Author, Book, Isbn, Title};
use crate::domain::fines::Rupees;
use crate::domain::identity::Identity;
use crate::domain::library::{Library, LibraryError};
use crate::domain::membership::ReaderId;

/// 待入库书目
#[derive(Debug, Clone)]
pub struct NewBook {
    pub isbn: Isbn,
    pub title: Title,
    pub author: Author,
}

/// 罚款收据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineReceipt {
    pub staff_id: StaffId,
    pub reader_id: ReaderId,
    pub amount: Rupees,
    /// 收取后读者剩余欠款
    pub remaining: Rupees,
    pub collected_at: DateTime<Utc>,
}

/// 馆员
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryStaff {
    id: StaffId,
    identity: Identity,
}

impl LibraryStaff {
    pub fn new(identity: Identity) -> Self {
        Self {
            id: StaffId::new(),
            identity,
        }
    }

    /// 新书入库
    ///
    /// 以全馆现有副本总数为基数，为每个副本生成连续登录号
    pub fn add_book<'a>(
        &self,
        library: &'a mut Library,
        new_book: NewBook,
        copies: usize,
        accession_prefix: &str,
        now: DateTime<Utc>,
    ) -> Result<&'a Book, LibraryError> {
        let base = library.total_copies();
        let mut book = Book::new(new_book.isbn, new_book.title, new_book.author, now);
        for i in 1..=copies {
            book.add_copy(AccessionNumber::sequential(accession_prefix, base + i));
        }
        library.add_book(book)
    }

    /// 为已有书目追加副本
    pub fn add_copies<'a>(
        &self,
        library: &'a mut Library,
        isbn: &Isbn,
        copies: usize,
        accession_prefix: &str,
    ) -> Result<&'a Book, LibraryError> {
        let base = library.total_copies();
        let numbers = (1..=copies)
            .map(|i| AccessionNumber::sequential(accession_prefix, base + i))
            .collect();
        library.add_copies(isbn, numbers)
    }

    /// 收取罚款，冲抵读者欠款
    pub fn collect_fine(
        &self,
        library: &mut Library,
        reader_id: &ReaderId,
        amount: Rupees,
        now: DateTime<Utc>,
    ) -> Result<FineReceipt, LibraryError> {
        let reader = library.reader_mut(reader_id)?;
        let remaining = reader.settle_fine(amount)?;
        Ok(FineReceipt {
            staff_id: self.id,
            reader_id: *reader_id,
            amount,
            remaining,
            collected_at: now,
        })
    }

    pub fn id(&self) -> &StaffId {
        &self.id
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name().as_str()
    }
}
