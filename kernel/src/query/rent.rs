use crate::entity::{BookIsbn, RentId, RentSummary, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentQuery: Sync + Send + 'static {
    async fn find_by_id(&self, id: &RentId)
        -> error_stack::Result<Option<RentSummary>, KernelError>;

    /// Loans of one book, oldest first.
    async fn find_by_book_isbn(
        &self,
        isbn: &BookIsbn,
    ) -> error_stack::Result<Vec<RentSummary>, KernelError>;

    /// Loans of one user, oldest first.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<RentSummary>, KernelError>;
}

pub trait DependOnRentQuery: Sync + Send + 'static {
    type RentQuery: RentQuery;
    fn rent_query(&self) -> &Self::RentQuery;
}
