//! Library Context - Aggregate Root

use chrono::{DateTime, Duration, Utc};

use super::LibraryError;
use crate::domain::catalogue::{AccessionNumber, Book, CatalogueError, Isbn};
use crate::domain::fines::{days_late, FineAssessment, FinePolicy};
use crate::domain::membership::{LibraryTicket, MembershipError, Reader, ReaderId};
use crate::domain::staff::{LibraryStaff, StaffId};

/// 还书结果
#[derive(Debug, Clone)]
pub struct ReturnOutcome {
    pub ticket: LibraryTicket,
    pub assessment: FineAssessment,
}

/// 逾期借阅（只读视图）
#[derive(Debug, Clone)]
pub struct OverdueLoan<'a> {
    pub reader: &'a Reader,
    pub ticket: &'a LibraryTicket,
    pub days_late: i64,
}

/// Library 聚合根
///
/// 不变量:
/// - 目录内 ISBN 唯一
/// - 登录号全馆唯一（副本只追加）
/// - 借出中的副本不会再次借出
/// - 书目、读者、馆员只追加不删除
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
    readers: Vec<Reader>,
    staff: Vec<LibraryStaff>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// 书目入库
    pub fn add_book(&mut self, book: Book) -> Result<&Book, LibraryError> {
        if self.find_book(book.isbn()).is_some() {
            return Err(CatalogueError::DuplicateIsbn(book.isbn().clone()).into());
        }
        self.books.push(book);
        Ok(&self.books[self.books.len() - 1])
    }

    /// 为已有书目追加副本
    pub fn add_copies(
        &mut self,
        isbn: &Isbn,
        accession_numbers: Vec<AccessionNumber>,
    ) -> Result<&Book, LibraryError> {
        let index = self.book_index(isbn)?;
        let book = &mut self.books[index];
        for number in accession_numbers {
            book.add_copy(number);
        }
        Ok(&*book)
    }

    /// 注册读者
    pub fn add_reader(&mut self, reader: Reader) -> ReaderId {
        let id = *reader.id();
        self.readers.push(reader);
        id
    }

    /// 注册馆员
    pub fn register_staff(&mut self, staff: LibraryStaff) -> StaffId {
        let id = *staff.id();
        self.staff.push(staff);
        id
    }

    /// 借书
    ///
    /// 先找可借副本，再扣读者借书证；任一步失败都不修改状态
    pub fn borrow_book(
        &mut self,
        reader_id: &ReaderId,
        isbn: &Isbn,
        now: DateTime<Utc>,
        loan_period: Duration,
    ) -> Result<LibraryTicket, LibraryError> {
        let book_index = self.book_index(isbn)?;
        let reader_index = self.reader_index(reader_id)?;

        let accession_number = self.books[book_index]
            .first_available_copy()
            .map(|copy| copy.accession_number().clone())
            .ok_or_else(|| CatalogueError::NoCopyAvailable(isbn.clone()))?;

        let ticket = LibraryTicket::new(isbn.clone(), accession_number, now, loan_period)?;
        self.readers[reader_index].borrow_ticket(ticket.clone())?;
        self.books[book_index].check_out(ticket.accession_number())?;

        Ok(ticket)
    }

    /// 还书
    ///
    /// 找到读者该书的第一条凭证，计算逾期罚款并记入读者欠款
    pub fn return_book(
        &mut self,
        reader_id: &ReaderId,
        isbn: &Isbn,
        now: DateTime<Utc>,
        policy: &FinePolicy,
    ) -> Result<ReturnOutcome, LibraryError> {
        let reader_index = self.reader_index(reader_id)?;
        let ticket_id = self.readers[reader_index]
            .ticket_for(isbn)
            .map(|t| *t.id())
            .ok_or_else(|| MembershipError::NoMatchingLoan(isbn.clone()))?;
        let book_index = self.book_index(isbn)?;

        let reader = &mut self.readers[reader_index];
        let ticket = reader.return_ticket(&ticket_id)?;
        let assessment = policy.assess(ticket.due_at(), now);
        reader.accrue_fine(assessment.amount);

        self.books[book_index].check_in(ticket.accession_number())?;

        Ok(ReturnOutcome { ticket, assessment })
    }

    /// 续借，已逾期的借阅不能续借
    pub fn renew_loan(
        &mut self,
        reader_id: &ReaderId,
        isbn: &Isbn,
        now: DateTime<Utc>,
        loan_period: Duration,
    ) -> Result<LibraryTicket, LibraryError> {
        let reader = self.reader_mut(reader_id)?;
        let ticket = reader
            .ticket_for(isbn)
            .ok_or_else(|| MembershipError::NoMatchingLoan(isbn.clone()))?;
        if ticket.is_overdue(now) {
            return Err(LibraryError::LoanOverdue(isbn.clone()));
        }
        let ticket_id = *ticket.id();
        let renewed = reader.renew_ticket(&ticket_id, now, loan_period)?;
        Ok(renewed.clone())
    }

    /// 全馆副本总数，用作登录号流水基数
    pub fn total_copies(&self) -> usize {
        self.books.iter().map(Book::copy_count).sum()
    }

    /// 所有逾期借阅，按读者注册顺序
    pub fn overdue_loans(&self, now: DateTime<Utc>) -> Vec<OverdueLoan<'_>> {
        self.readers
            .iter()
            .flat_map(|reader| {
                reader
                    .active_tickets()
                    .iter()
                    .filter(move |t| t.is_overdue(now))
                    .map(move |ticket| OverdueLoan {
                        reader,
                        ticket,
                        days_late: days_late(ticket.due_at(), now),
                    })
            })
            .collect()
    }

    // Lookups
    pub fn find_book(&self, isbn: &Isbn) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn() == isbn)
    }

    pub fn book(&self, isbn: &Isbn) -> Result<&Book, LibraryError> {
        self.find_book(isbn)
            .ok_or_else(|| CatalogueError::NotFound(isbn.clone()).into())
    }

    pub fn reader(&self, id: &ReaderId) -> Result<&Reader, LibraryError> {
        self.readers
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| MembershipError::NotFound(*id).into())
    }

    pub fn reader_mut(&mut self, id: &ReaderId) -> Result<&mut Reader, LibraryError> {
        let index = self.reader_index(id)?;
        Ok(&mut self.readers[index])
    }

    pub fn staff_member(&self, id: &StaffId) -> Result<&LibraryStaff, LibraryError> {
        self.staff
            .iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| LibraryError::StaffNotFound(*id))
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn readers(&self) -> &[Reader] {
        &self.readers
    }

    pub fn staff(&self) -> &[LibraryStaff] {
        &self.staff
    }

    fn book_index(&self, isbn: &Isbn) -> Result<usize, LibraryError> {
        self.books
            .iter()
            .position(|b| b.isbn() == isbn)
            .ok_or_else(|| CatalogueError::NotFound(isbn.clone()).into())
    }

    fn reader_index(&self, id: &ReaderId) -> Result<usize, LibraryError> {
        self.readers
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| MembershipError::NotFound(*id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::{Author, Title};
    use crate::domain::fines::Rupees;
    use crate::domain::identity::Identity;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    fn isbn(value: &str) -> Isbn {
        Isbn::new(value).unwrap()
    }

    fn library_with(books: &[(&str, &str, usize)]) -> Library {
        let mut library = Library::new();
        for (code, title, copies) in books {
            let base = library.total_copies();
            let mut book = Book::new(
                isbn(code),
                Title::new(*title).unwrap(),
                Author::new("Author").unwrap(),
                start(),
            );
            for i in 1..=*copies {
                book.add_copy(AccessionNumber::sequential("ACC", base + i));
            }
            library.add_book(book).unwrap();
        }
        library
    }

    fn register(library: &mut Library, tickets: u32) -> ReaderId {
        library.add_reader(Reader::new(Identity::parse("Vineesha", "123 Street, City").unwrap(), tickets, start()))
    }

    #[test]
    fn test_borrow_and_return_on_time() {
        let mut library = library_with(&[("12345", "Java Programming", 3)]);
        let reader = register(&mut library, 1);

        let ticket = library
            .borrow_book(&reader, &isbn("12345"), start(), Duration::days(14))
            .unwrap();
        assert_eq!(ticket.accession_number().as_str(), "ACC1");
        assert_eq!(ticket.due_at(), start() + Duration::days(14));
        assert_eq!(library.book(&isbn("12345")).unwrap().available_count(), 2);

        let outcome = library
            .return_book(&reader, &isbn("12345"), start() + Duration::days(10), &FinePolicy::default())
            .unwrap();
        assert!(outcome.assessment.amount.is_zero());
        assert_eq!(library.reader(&reader).unwrap().available_tickets(), 1);
        assert_eq!(library.book(&isbn("12345")).unwrap().available_count(), 3);
    }

    #[test]
    fn test_borrow_without_quota_leaves_state_untouched() {
        let mut library = library_with(&[("12345", "Java Programming", 1)]);
        let reader = register(&mut library, 0);

        let result = library.borrow_book(&reader, &isbn("12345"), start(), Duration::days(14));
        assert!(matches!(
            result,
            Err(LibraryError::Membership(MembershipError::InsufficientTickets))
        ));
        assert!(library.reader(&reader).unwrap().active_tickets().is_empty());
        assert_eq!(library.book(&isbn("12345")).unwrap().available_count(), 1);
    }

    #[test]
    fn test_book_without_copies() {
        let mut library = library_with(&[("12345", "Java Programming", 0)]);
        let reader = register(&mut library, 1);

        let result = library.borrow_book(&reader, &isbn("12345"), start(), Duration::days(14));
        assert!(matches!(
            result,
            Err(LibraryError::Catalogue(CatalogueError::NoCopyAvailable(_)))
        ));
        assert_eq!(library.reader(&reader).unwrap().available_tickets(), 1);
    }

    #[test]
    fn test_copy_on_loan_not_lent_twice() {
        let mut library = library_with(&[("12345", "Java Programming", 1)]);
        let first = register(&mut library, 1);
        let second = register(&mut library, 1);

        library.borrow_book(&first, &isbn("12345"), start(), Duration::days(14)).unwrap();
        let result = library.borrow_book(&second, &isbn("12345"), start(), Duration::days(14));
        assert!(matches!(
            result,
            Err(LibraryError::Catalogue(CatalogueError::NoCopyAvailable(_)))
        ));
        assert_eq!(library.reader(&second).unwrap().available_tickets(), 1);
    }

    #[test]
    fn test_return_without_loan() {
        let mut library = library_with(&[("12345", "Java Programming", 1)]);
        let reader = register(&mut library, 2);

        let result = library.return_book(&reader, &isbn("12345"), start(), &FinePolicy::default());
        assert!(matches!(
            result,
            Err(LibraryError::Membership(MembershipError::NoMatchingLoan(_)))
        ));
        assert_eq!(library.reader(&reader).unwrap().available_tickets(), 2);
    }

    #[test]
    fn test_late_return_accrues_fine() {
        let mut library = library_with(&[("12345", "Java Programming", 1)]);
        let reader = register(&mut library, 1);
        library.borrow_book(&reader, &isbn("12345"), start(), Duration::days(14)).unwrap();

        let outcome = library
            .return_book(&reader, &isbn("12345"), start() + Duration::days(17), &FinePolicy::default())
            .unwrap();
        assert_eq!(outcome.assessment.days_late, 3);
        assert_eq!(outcome.assessment.amount, Rupees::new(3));
        assert_eq!(library.reader(&reader).unwrap().outstanding_fines(), Rupees::new(3));
    }

    #[test]
    fn test_renew_loan() {
        let mut library = library_with(&[("12345", "Java Programming", 1)]);
        let reader = register(&mut library, 1);
        library.borrow_book(&reader, &isbn("12345"), start(), Duration::days(14)).unwrap();

        let renew_at = start() + Duration::days(13);
        let renewed = library
            .renew_loan(&reader, &isbn("12345"), renew_at, Duration::days(14))
            .unwrap();
        assert_eq!(renewed.due_at(), renew_at + Duration::days(14));

        let too_late = renewed.due_at() + Duration::days(2);
        let result = library.renew_loan(&reader, &isbn("12345"), too_late, Duration::days(14));
        assert!(matches!(result, Err(LibraryError::LoanOverdue(_))));
    }

    #[test]
    fn test_out_of_range_loan_period_leaves_state_untouched() {
        let mut library = library_with(&[("12345", "Java Programming", 1)]);
        let reader = register(&mut library, 1);
        let huge = Duration::days(i64::from(u32::MAX));

        let result = library.borrow_book(&reader, &isbn("12345"), start(), huge);
        assert!(matches!(
            result,
            Err(LibraryError::Membership(MembershipError::DueDateOutOfRange(_)))
        ));
        assert_eq!(library.reader(&reader).unwrap().available_tickets(), 1);
        assert_eq!(library.book(&isbn("12345")).unwrap().available_count(), 1);

        let ticket = library
            .borrow_book(&reader, &isbn("12345"), start(), Duration::days(14))
            .unwrap();
        let result = library.renew_loan(&reader, &isbn("12345"), start(), huge);
        assert!(matches!(
            result,
            Err(LibraryError::Membership(MembershipError::DueDateOutOfRange(_)))
        ));
        let held = library.reader(&reader).unwrap().ticket_for(&isbn("12345")).unwrap();
        assert_eq!(held.due_at(), ticket.due_at());
    }

    #[test]
    fn test_overdue_loans() {
        let mut library = library_with(&[("1", "A", 1), ("2", "B", 1)]);
        let reader = register(&mut library, 2);
        library.borrow_book(&reader, &isbn("1"), start(), Duration::days(14)).unwrap();
        library
            .borrow_book(&reader, &isbn("2"), start() + Duration::days(5), Duration::days(14))
            .unwrap();

        let overdue = library.overdue_loans(start() + Duration::days(16));
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].ticket.isbn().as_str(), "1");
        assert_eq!(overdue[0].days_late, 2);
    }

    #[test]
    fn test_unknown_reader_and_book() {
        let mut library = library_with(&[("1", "A", 1)]);
        let reader = register(&mut library, 1);

        let result = library.borrow_book(&ReaderId::new(), &isbn("1"), start(), Duration::days(14));
        assert!(matches!(result, Err(LibraryError::Membership(MembershipError::NotFound(_)))));

        let result = library.borrow_book(&reader, &isbn("999"), start(), Duration::days(14));
        assert!(matches!(result, Err(LibraryError::Catalogue(CatalogueError::NotFound(_)))));
    }
}
