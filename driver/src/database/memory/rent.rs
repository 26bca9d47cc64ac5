use std::collections::HashMap;
use std::sync::RwLock;

use error_stack::Report;
use kernel::interface::query::RentQuery;
use kernel::interface::update::{RentClosing, RentModifier};
use kernel::prelude::entity::{BookIsbn, Rent, RentId, RentSummary, UserId};
use kernel::KernelError;

use crate::error::ConvertError;

/// Loan ledger. Loans are kept in the order they were opened.
///
/// The ledger is the only owner of each [`Rent`]. Queries hand out summaries,
/// so closing is only reachable through [`RentModifier::close`].
#[derive(Debug, Default)]
pub struct InMemoryRentRepository {
    ledger: RwLock<RentLedger>,
}

#[derive(Debug, Default)]
struct RentLedger {
    rents: Vec<Rent>,
    index: HashMap<RentId, usize>,
}

impl RentLedger {
    fn get(&self, id: &RentId) -> Option<&Rent> {
        self.index.get(id).and_then(|position| self.rents.get(*position))
    }

    fn get_mut(&mut self, id: &RentId) -> Option<&mut Rent> {
        let position = *self.index.get(id)?;
        self.rents.get_mut(position)
    }

    fn summaries(&self, predicate: impl Fn(&Rent) -> bool) -> Vec<RentSummary> {
        self.rents
            .iter()
            .filter(|rent| predicate(rent))
            .map(Rent::summarize)
            .collect()
    }
}

#[async_trait::async_trait]
impl RentQuery for InMemoryRentRepository {
    async fn find_by_id(
        &self,
        id: &RentId,
    ) -> error_stack::Result<Option<RentSummary>, KernelError> {
        let ledger = self.ledger.read().convert_error()?;
        Ok(ledger.get(id).map(Rent::summarize))
    }

    async fn find_by_book_isbn(
        &self,
        isbn: &BookIsbn,
    ) -> error_stack::Result<Vec<RentSummary>, KernelError> {
        let ledger = self.ledger.read().convert_error()?;
        Ok(ledger.summaries(|rent| rent.book().isbn() == isbn))
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<RentSummary>, KernelError> {
        let ledger = self.ledger.read().convert_error()?;
        Ok(ledger.summaries(|rent| rent.user().id() == user_id))
    }
}

#[async_trait::async_trait]
impl RentModifier for InMemoryRentRepository {
    async fn create(&self, rent: Rent) -> error_stack::Result<(), KernelError> {
        let mut ledger = self.ledger.write().convert_error()?;
        if ledger.index.contains_key(rent.id()) {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("Loan {:?} is already recorded", rent.id())));
        }
        let position = ledger.rents.len();
        ledger.index.insert(*rent.id(), position);
        ledger.rents.push(rent);
        Ok(())
    }

    async fn close(&self, id: &RentId) -> error_stack::Result<Option<RentClosing>, KernelError> {
        let mut ledger = self.ledger.write().convert_error()?;
        let Some(rent) = ledger.get_mut(id) else {
            return Ok(None);
        };
        if rent.close() {
            Ok(Some(RentClosing::Closed(rent.summarize())))
        } else {
            tracing::debug!(rent = ?id, "loan was already closed");
            Ok(Some(RentClosing::AlreadyClosed(rent.summarize())))
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use kernel::interface::query::RentQuery;
    use kernel::interface::update::{RentClosing, RentModifier};
    use kernel::prelude::entity::{
        Book, BookAuthor, BookIsbn, BookTitle, CourseName, DepartmentName, Rent, RentId, User,
        UserId, UserName,
    };
    use kernel::KernelError;

    use crate::database::memory::InMemoryRentRepository;

    fn book(isbn: &str) -> Arc<Book> {
        Arc::new(Book::new(
            BookIsbn::new(isbn),
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

    fn instructor() -> Arc<User> {
        Arc::new(User::instructor(
            UserId::new(2u32),
            UserName::new("Dra. Ana Costa"),
            DepartmentName::new("Computação"),
        ))
    }

    fn lend(book: &Arc<Book>, user: &Arc<User>) -> error_stack::Result<Rent, KernelError> {
        assert!(book.try_borrow());
        Rent::open(Arc::clone(book), Arc::clone(user))
    }

    #[tokio::test]
    async fn create_and_close() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryRentRepository::default();
        let book = book("978-85-333-1234-5");
        let rent = lend(&book, &student())?;
        let id = *rent.id();
        repository.create(rent).await?;

        let stored = repository.find_by_id(&id).await?.unwrap();
        assert!(stored.is_open());

        let closing = repository.close(&id).await?.unwrap();
        assert!(closing.is_closed_now());
        let closed = closing.into_summary();
        assert!(!closed.is_open());
        assert!(book.is_available());

        let stored = repository.find_by_id(&id).await?.unwrap();
        assert_eq!(stored.returned_at(), closed.returned_at());
        Ok(())
    }

    #[tokio::test]
    async fn close_twice_keeps_first_return() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryRentRepository::default();
        let book = book("978-85-333-1234-5");
        let rent = lend(&book, &student())?;
        let id = *rent.id();
        repository.create(rent).await?;

        let Some(RentClosing::Closed(first)) = repository.close(&id).await? else {
            panic!("first close must close the loan");
        };
        let Some(RentClosing::AlreadyClosed(second)) = repository.close(&id).await? else {
            panic!("second close must be a no-op");
        };
        assert_eq!(first.returned_at(), second.returned_at());
        Ok(())
    }

    #[tokio::test]
    async fn close_unknown_is_none() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryRentRepository::default();
        assert!(repository.close(&RentId::default()).await?.is_none());
        assert!(repository.find_by_id(&RentId::default()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn find_by_book_and_user() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryRentRepository::default();
        let first = book("978-85-333-1234-5");
        let second = book("978-85-333-5678-9");
        let student = student();
        let instructor = instructor();

        let rent = lend(&first, &student)?;
        let first_id = *rent.id();
        repository.create(rent).await?;
        repository.close(&first_id).await?;
        repository.create(lend(&first, &instructor)?).await?;
        repository.create(lend(&second, &student)?).await?;

        let by_book = repository
            .find_by_book_isbn(&BookIsbn::new("978-85-333-1234-5"))
            .await?;
        assert_eq!(by_book.len(), 2);
        assert_eq!(by_book[0].id(), &first_id);
        assert!(!by_book[0].is_open());
        assert!(by_book[1].is_open());

        let by_user = repository.find_by_user_id(&UserId::new(1u32)).await?;
        assert_eq!(by_user.len(), 2);
        assert!(by_user
            .iter()
            .all(|rent| rent.user_id() == &UserId::new(1u32)));
        Ok(())
    }

    #[tokio::test]
    async fn reclosing_does_not_release_a_later_loan() -> error_stack::Result<(), KernelError> {
        let repository = InMemoryRentRepository::default();
        let book = book("978-85-333-1234-5");
        let student = student();

        let rent = lend(&book, &student)?;
        let first = *rent.id();
        repository.create(rent).await?;
        repository.close(&first).await?;

        let rent = lend(&book, &instructor())?;
        let second = *rent.id();
        repository.create(rent).await?;

        let closing = repository.close(&first).await?.unwrap();
        assert!(!closing.is_closed_now());
        assert!(!book.is_available());
        assert!(repository.find_by_id(&second).await?.unwrap().is_open());
        Ok(())
    }
}
