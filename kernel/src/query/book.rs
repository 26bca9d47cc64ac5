use std::sync::Arc;

use crate::entity::{Book, BookIsbn, SelectLimit, SelectOffset};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery: Sync + Send + 'static {
    async fn find_by_isbn(
        &self,
        isbn: &BookIsbn,
    ) -> error_stack::Result<Option<Arc<Book>>, KernelError>;

    /// Books ordered by ISBN.
    async fn find_all(
        &self,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Arc<Book>>, KernelError>;
}

pub trait DependOnBookQuery: Sync + Send + 'static {
    type BookQuery: BookQuery;
    fn book_query(&self) -> &Self::BookQuery;
}
