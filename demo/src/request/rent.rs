use crate::controller::Intake;
use application::transfer::{CreateRentDto, ReturnRentDto};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RentRequest {
    isbn: String,
    user_id: u32,
}

impl RentRequest {
    pub fn new(isbn: impl Into<String>, user_id: u32) -> Self {
        Self {
            isbn: isbn.into(),
            user_id,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReturnRequest {
    id: Uuid,
}

impl ReturnRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct RentTransformer;

impl Intake<RentRequest> for RentTransformer {
    type To = CreateRentDto;
    fn emit(&self, RentRequest { isbn, user_id }: RentRequest) -> Self::To {
        CreateRentDto { isbn, user_id }
    }
}

impl Intake<ReturnRequest> for RentTransformer {
    type To = ReturnRentDto;
    fn emit(&self, ReturnRequest { id }: ReturnRequest) -> Self::To {
        ReturnRentDto { id }
    }
}
