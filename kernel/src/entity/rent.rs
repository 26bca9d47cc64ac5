mod id;
mod rented_at;
mod returned_at;

use std::sync::Arc;

pub use self::{id::*, rented_at::*, returned_at::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::{Book, BookIsbn, BookTitle, User, UserId};
use crate::KernelError;

/// A loan of one book to one user.
///
/// A loan is `Open` while `returned_at` is `None` and `Closed` afterwards.
/// It can only be opened against a book whose [`Book::try_borrow`] just
/// succeeded, and closing it is the only way it hands the book back.
///
/// A `Rent` is not `Clone`. Each loan exists once, owned by the ledger that
/// recorded it, and readers get a [`RentSummary`] instead.
#[derive(Debug, References)]
pub struct Rent {
    id: RentId,
    book: Arc<Book>,
    user: Arc<User>,
    rented_at: RentedAt,
    returned_at: Option<ReturnedAt>,
}

impl Rent {
    /// Opens a loan, claiming the borrow the caller obtained from `book.try_borrow()`.
    ///
    /// Fails with [`KernelError::Contract`] if the book was never borrowed and
    /// with [`KernelError::Concurrency`] if another loan already claimed it.
    pub fn open(book: Arc<Book>, user: Arc<User>) -> error_stack::Result<Self, KernelError> {
        book.lend()?;
        Ok(Self {
            id: RentId::default(),
            book,
            user,
            rented_at: RentedAt::now(),
            returned_at: None,
        })
    }

    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Closes the loan and releases the book.
    ///
    /// Returns `false` if the loan was already closed, in which case nothing changes.
    pub fn close(&mut self) -> bool {
        if self.returned_at.is_some() {
            return false;
        }
        self.returned_at = Some(ReturnedAt::now_after(&self.rented_at));
        self.book.release();
        true
    }

    pub fn summarize(&self) -> RentSummary {
        RentSummary {
            id: self.id,
            isbn: self.book.isbn().clone(),
            title: self.book.title().clone(),
            user_id: *self.user.id(),
            user: self.user.display_name(),
            rented_at: self.rented_at,
            returned_at: self.returned_at,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct RentSummary {
    id: RentId,
    isbn: BookIsbn,
    title: BookTitle,
    user_id: UserId,
    user: String,
    rented_at: RentedAt,
    returned_at: Option<ReturnedAt>,
}

impl RentSummary {
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::entity::{
        Book, BookAuthor, BookIsbn, BookTitle, CourseName, Rent, User, UserId, UserName,
    };
    use crate::KernelError;

    fn book() -> Arc<Book> {
        Arc::new(Book::new(
            BookIsbn::new("978-85-333-1234-5"),
            BookTitle::new("Introdução à POO"),
            BookAuthor::new("José da Silva"),
        ))
    }

    fn student() -> Arc<User> {
        Arc::new(User::student(
            UserId::new(1u32),
            UserName::new("João Silva"),
            CourseName::new("Engenharia de Software"),
        ))
    }

    #[test]
    fn open_and_close() -> error_stack::Result<(), KernelError> {
        let book = book();
        assert!(book.try_borrow());
        let mut rent = Rent::open(Arc::clone(&book), student())?;
        assert!(rent.is_open());
        assert!(!book.is_available());
        assert!(!book.try_borrow());

        assert!(rent.close());
        assert!(!rent.is_open());
        assert!(book.is_available());

        let returned_at = rent.returned_at().expect("closed loan has a return time");
        assert!(returned_at.as_ref() >= rent.rented_at().as_ref());
        Ok(())
    }

    #[test]
    fn second_close_keeps_return_time() -> error_stack::Result<(), KernelError> {
        let book = book();
        assert!(book.try_borrow());
        let mut rent = Rent::open(Arc::clone(&book), student())?;
        assert!(rent.close());
        let first = *rent.returned_at();

        // The book goes out again before the stale loan is closed a second time.
        assert!(book.try_borrow());
        assert!(!rent.close());
        assert_eq!(*rent.returned_at(), first);
        assert!(!book.is_available());
        Ok(())
    }

    #[test]
    fn closed_loan_cannot_release_later_loan() -> error_stack::Result<(), KernelError> {
        let book = book();
        let user = student();
        assert!(book.try_borrow());
        let mut first = Rent::open(Arc::clone(&book), Arc::clone(&user))?;
        assert!(first.close());

        assert!(book.try_borrow());
        let second = Rent::open(Arc::clone(&book), user)?;

        assert!(!first.close());
        assert!(!first.is_open());
        assert!(second.is_open());
        assert!(!book.is_available());
        assert!(!book.try_borrow());
        Ok(())
    }

    #[test]
    fn open_without_borrow_is_rejected() {
        let book = book();
        let error = Rent::open(Arc::clone(&book), student()).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Contract);
        assert!(book.is_available());
    }

    #[test]
    fn one_borrow_opens_one_loan() -> error_stack::Result<(), KernelError> {
        let book = book();
        assert!(book.try_borrow());
        let _rent = Rent::open(Arc::clone(&book), student())?;
        let error = Rent::open(Arc::clone(&book), student()).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Concurrency);
        Ok(())
    }

    #[test]
    fn borrow_again_after_close() -> error_stack::Result<(), KernelError> {
        let book = book();
        let user = student();
        for _ in 0..3 {
            assert!(book.try_borrow());
            let mut rent = Rent::open(Arc::clone(&book), Arc::clone(&user))?;
            assert!(!book.is_available());
            rent.close();
            assert!(book.is_available());
        }
        Ok(())
    }

    #[test]
    fn summary_projects_loan() -> error_stack::Result<(), KernelError> {
        let book = book();
        assert!(book.try_borrow());
        let mut rent = Rent::open(Arc::clone(&book), student())?;

        let open = rent.summarize();
        assert_eq!(open.title(), &BookTitle::new("Introdução à POO"));
        assert_eq!(open.user(), "João Silva (Student)");
        assert_eq!(open.rented_at(), rent.rented_at());
        assert!(open.returned_at().is_none());

        rent.close();
        let closed = rent.summarize();
        assert_eq!(closed.returned_at(), rent.returned_at());
        assert_eq!(open.id(), closed.id());
        Ok(())
    }
}
