use std::sync::Arc;

use crate::entity::Book;
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    /// Adds a book to the catalog. Fails with [`KernelError::Conflict`] on a duplicated ISBN.
    async fn create(&self, book: Book) -> error_stack::Result<Arc<Book>, KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send {
    type BookModifier: BookModifier;
    fn book_modifier(&self) -> &Self::BookModifier;
}
