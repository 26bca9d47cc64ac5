use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookAuthor, BookIsbn, BookTitle};
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, GetAllBookDto, GetBookDto};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let isbn = BookIsbn::new(dto.isbn);
        let book = self.book_query().find_by_isbn(&isbn).await?;
        Ok(book.map(|book| BookDto::from(book.describe())))
    }

    async fn get_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self
            .book_query()
            .find_all(&dto.limit, &dto.offset)
            .await?;
        Ok(books
            .iter()
            .map(|book| BookDto::from(book.describe()))
            .collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let book = Book::new(
            BookIsbn::new(dto.isbn),
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
        );
        let book = self.book_modifier().create(book).await?;
        tracing::debug!(isbn = ?book.isbn(), "book added to catalog");
        Ok(BookDto::from(book.describe()))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}
