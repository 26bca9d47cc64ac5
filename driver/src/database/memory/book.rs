use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use error_stack::Report;
use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookIsbn, SelectLimit, SelectOffset};
use kernel::KernelError;

use crate::error::ConvertError;

#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<BTreeMap<BookIsbn, Arc<Book>>>,
}

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    async fn find_by_isbn(
        &self,
        isbn: &BookIsbn,
    ) -> error_stack::Result<Option<Arc<Book>>, KernelError> {
        let books = self.books.read().convert_error()?;
        Ok(books.get(isbn).cloned())
    }

    async fn find_all(
        &self,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Arc<Book>>, KernelError> {
        let books = self.books.read().convert_error()?;
        Ok(books
            .values()
            .skip(*offset.as_ref())
            .take(*limit.as_ref())
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    async fn create(&self, book: Book) -> error_stack::Result<Arc<Book>, KernelError> {
        let mut books = self.books.write().convert_error()?;
        if books.contains_key(book.isbn()) {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("ISBN {:?} is already in the catalog", book.isbn())));
        }
        let book = Arc::new(book);
        books.insert(book.isbn().clone(), Arc::clone(&book));
        tracing::debug!(isbn = ?book.isbn(), "stored book");
        Ok(book)
    }
}
