//! Catalogue Context - Entities

use serde::{Deserialize, Serialize};

use super::{AccessionNumber, Isbn};

/// 副本借出状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyStatus {
    #[default]
    Available,
    OnLoan,
}

impl CopyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "available",
            CopyStatus::OnLoan => "on_loan",
        }
    }
}

/// 实体副本
///
/// 不变量:
/// - accession_number 全馆唯一
/// - isbn 指回所属 Book（非拥有引用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCopy {
    isbn: Isbn,
    accession_number: AccessionNumber,
    status: CopyStatus,
}

impl BookCopy {
    pub fn new(isbn: Isbn, accession_number: AccessionNumber) -> Self {
        Self {
            isbn,
            accession_number,
            status: CopyStatus::Available,
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn accession_number(&self) -> &AccessionNumber {
        &self.accession_number
    }

    pub fn status(&self) -> CopyStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == CopyStatus::Available
    }

    pub(crate) fn set_status(&mut self, status: CopyStatus) {
        self.status = status;
    }
}
