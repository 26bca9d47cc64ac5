use crate::controller::Intake;
use application::transfer::{CreateBookDto, GetAllBookDto, GetBookDto};

#[derive(Debug, Clone)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    isbn: String,
}

impl CreateBookRequest {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetBookRequest {
    isbn: String,
}

impl GetBookRequest {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self { isbn: isbn.into() }
    }
}

#[derive(Debug, Default)]
pub struct GetAllBookRequest;

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(
        &self,
        CreateBookRequest {
            title,
            author,
            isbn,
        }: CreateBookRequest,
    ) -> Self::To {
        CreateBookDto {
            isbn,
            title,
            author,
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, GetBookRequest { isbn }: GetBookRequest) -> Self::To {
        GetBookDto { isbn }
    }
}

impl Intake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, _: GetAllBookRequest) -> Self::To {
        GetAllBookDto::default()
    }
}
