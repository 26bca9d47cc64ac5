use std::sync::Arc;

use error_stack::Report;
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnRentQuery, DependOnUserQuery, RentQuery, UserQuery,
};
use kernel::interface::update::{DependOnRentModifier, RentModifier};
use kernel::prelude::entity::{BookIsbn, Rent, RentId, UserId};
use kernel::KernelError;

use crate::transfer::{
    CreateRentDto, GetRentDto, GetRentFromBookIsbnDto, GetRentFromUserIdDto, RentDto,
    ReturnRentDto,
};

#[async_trait::async_trait]
pub trait GetRentService: 'static + Sync + Send + DependOnRentQuery {
    async fn get_rent(&self, dto: GetRentDto) -> error_stack::Result<Option<RentDto>, KernelError> {
        let id = RentId::new(dto.id);
        let rent = self.rent_query().find_by_id(&id).await?;
        Ok(rent.map(RentDto::from))
    }

    async fn get_rents_from_book(
        &self,
        dto: GetRentFromBookIsbnDto,
    ) -> error_stack::Result<Vec<RentDto>, KernelError> {
        let isbn = BookIsbn::new(dto.isbn);
        let rents = self.rent_query().find_by_book_isbn(&isbn).await?;
        Ok(rents.into_iter().map(RentDto::from).collect())
    }

    async fn get_rents_from_user(
        &self,
        dto: GetRentFromUserIdDto,
    ) -> error_stack::Result<Vec<RentDto>, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let rents = self.rent_query().find_by_user_id(&user_id).await?;
        Ok(rents.into_iter().map(RentDto::from).collect())
    }
}

impl<T> GetRentService for T where T: DependOnRentQuery {}

#[async_trait::async_trait]
pub trait RentService:
    'static + Sync + Send + DependOnBookQuery + DependOnUserQuery + DependOnRentModifier
{
    /// Lends a book to a user.
    ///
    /// Returns `Ok(None)` when the book is currently lent to somebody else.
    async fn rent_book(
        &self,
        dto: CreateRentDto,
    ) -> error_stack::Result<Option<RentDto>, KernelError> {
        let isbn = BookIsbn::new(dto.isbn);
        let user_id = UserId::new(dto.user_id);

        let book = self
            .book_query()
            .find_by_isbn(&isbn)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No book with ISBN {:?}", isbn))
            })?;
        let user = self
            .user_query()
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No user with id {:?}", user_id))
            })?;

        if !book.try_borrow() {
            tracing::info!(isbn = ?isbn, user = ?user_id, "book is not available");
            return Ok(None);
        }

        let rent = Rent::open(Arc::clone(&book), user).inspect_err(|report| {
            tracing::warn!(isbn = ?isbn, "borrow was claimed by another loan: {report:?}");
        })?;
        let dto = RentDto::from(rent.summarize());

        if let Err(report) = self.rent_modifier().create(rent).await {
            book.release();
            return Err(report);
        }
        tracing::info!(rent = %dto.id, isbn = ?isbn, user = ?user_id, "loan opened");
        Ok(Some(dto))
    }
}

impl<T> RentService for T where
    T: DependOnBookQuery + DependOnUserQuery + DependOnRentModifier
{
}

#[async_trait::async_trait]
pub trait ReturnService: 'static + Sync + Send + DependOnRentModifier {
    /// Closes a loan and hands its book back to the catalog.
    ///
    /// Returning an already closed loan leaves it as it was.
    async fn return_book(&self, dto: ReturnRentDto) -> error_stack::Result<RentDto, KernelError> {
        let id = RentId::new(dto.id);
        let closing = self.rent_modifier().close(&id).await?.ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("No loan with id {}", dto.id))
        })?;
        if closing.is_closed_now() {
            tracing::info!(rent = %dto.id, "loan closed");
        } else {
            tracing::debug!(rent = %dto.id, "loan was already closed");
        }
        Ok(RentDto::from(closing.into_summary()))
    }
}

impl<T> ReturnService for T where T: DependOnRentModifier {}
