mod author;
mod availability;
mod isbn;
mod title;

pub use self::{author::*, availability::*, isbn::*, title::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::KernelError;

/// One physical copy in the catalog.
///
/// Books are shared behind `Arc` by the catalog owner and by every loan that
/// references them. The only writable state is the availability flag, which is
/// driven through [`Book::try_borrow`] and [`Book::release`].
#[derive(Debug, References)]
pub struct Book {
    isbn: BookIsbn,
    title: BookTitle,
    author: BookAuthor,
    availability: BookAvailability,
}

impl Book {
    pub fn new(isbn: BookIsbn, title: BookTitle, author: BookAuthor) -> Self {
        Self {
            isbn,
            title,
            author,
            availability: BookAvailability::new(),
        }
    }

    /// Marks the book unavailable if it currently is available.
    ///
    /// Returns `false` without touching the state when somebody else already
    /// holds it. Racing callers on one available book get exactly one `true`.
    pub fn try_borrow(&self) -> bool {
        self.availability.try_borrow()
    }

    /// Marks the book available again. Calling it on an available book does nothing.
    pub fn release(&self) {
        self.availability.release()
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    pub(crate) fn lend(&self) -> error_stack::Result<(), KernelError> {
        self.availability.lend()
    }

    pub fn describe(&self) -> BookDescription {
        BookDescription {
            isbn: self.isbn.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            available: self.is_available(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct BookDescription {
    isbn: BookIsbn,
    title: BookTitle,
    author: BookAuthor,
    available: bool,
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Barrier};
    use std::thread;

    use crate::entity::{Book, BookAuthor, BookIsbn, BookTitle};

    fn book() -> Book {
        Book::new(
            BookIsbn::new("978-85-333-1234-5"),
            BookTitle::new("Introdução à POO"),
            BookAuthor::new("José da Silva"),
        )
    }

    #[test]
    fn available_on_creation() {
        let book = book();
        assert!(book.is_available());
        assert!(*book.describe().available());
    }

    #[test]
    fn borrow_then_release() {
        let book = book();
        assert!(book.try_borrow());
        assert!(!book.is_available());

        assert!(!book.try_borrow());
        assert!(!book.is_available());

        book.release();
        assert!(book.is_available());
        book.release();
        assert!(book.is_available());

        assert!(book.try_borrow());
        assert!(!book.is_available());
    }

    #[test]
    fn describe_reflects_state() {
        let book = book();
        let before = book.describe();
        assert_eq!(before.isbn(), &BookIsbn::new("978-85-333-1234-5"));
        assert_eq!(before.title(), &BookTitle::new("Introdução à POO"));
        assert_eq!(before.author(), &BookAuthor::new("José da Silva"));

        book.try_borrow();
        let after = book.describe();
        assert!(!*after.available());
        assert_eq!(before.title(), after.title());
    }

    #[test]
    fn racing_borrowers_get_one_success() {
        const ACTORS: usize = 16;
        for _ in 0..64 {
            let book = Arc::new(book());
            let barrier = Arc::new(Barrier::new(ACTORS));
            let handles = (0..ACTORS)
                .map(|_| {
                    let book = Arc::clone(&book);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        book.try_borrow()
                    })
                })
                .collect::<Vec<_>>();
            let winners = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .filter(|won| *won)
                .count();
            assert_eq!(winners, 1);
            assert!(!book.is_available());
        }
    }
}
