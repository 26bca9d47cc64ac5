use kernel::prelude::entity::{BookDescription, DestructBookDescription, SelectLimit, SelectOffset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl From<BookDescription> for BookDto {
    fn from(value: BookDescription) -> Self {
        let DestructBookDescription {
            isbn,
            title,
            author,
            available,
        } = value.into_destruct();
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            available,
        }
    }
}

pub struct GetBookDto {
    pub isbn: String,
}

#[derive(Default)]
pub struct GetAllBookDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateBookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
}
