use kernel::interface::query::{DependOnBookQuery, DependOnRentQuery, DependOnUserQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnRentModifier, DependOnUserModifier};

pub use self::{book::*, rent::*, user::*};

mod book;
mod rent;
mod user;

/// Catalog, patron registry and loan ledger kept in process memory.
///
/// Every application service is available on this type through the
/// `DependOn*` implementations below.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    books: InMemoryBookRepository,
    users: InMemoryUserRepository,
    rents: InMemoryRentRepository,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DependOnBookQuery for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &self.books
    }
}

impl DependOnBookModifier for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &self.books
    }
}

impl DependOnUserQuery for InMemoryDatabase {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &self.users
    }
}

impl DependOnUserModifier for InMemoryDatabase {
    type UserModifier = InMemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &self.users
    }
}

impl DependOnRentQuery for InMemoryDatabase {
    type RentQuery = InMemoryRentRepository;
    fn rent_query(&self) -> &Self::RentQuery {
        &self.rents
    }
}

impl DependOnRentModifier for InMemoryDatabase {
    type RentModifier = InMemoryRentRepository;
    fn rent_modifier(&self) -> &Self::RentModifier {
        &self.rents
    }
}
