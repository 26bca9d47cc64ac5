use crate::controller::Exhaust;
use application::transfer::BookDto;

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = String;
    fn emit(&self, input: BookDto) -> Self::To {
        format!(
            "Title: {} | Author: {} | ISBN: {} | Available: {}",
            input.title, input.author, input.isbn, input.available
        )
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<String>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(|book| Exhaust::<BookDto>::emit(self, book))
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        input
            .into_iter()
            .map(|book| Exhaust::<BookDto>::emit(self, book))
            .collect()
    }
}
