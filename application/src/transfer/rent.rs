use kernel::prelude::entity::{DestructRentSummary, RentSummary};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentDto {
    pub id: Uuid,
    pub isbn: String,
    pub title: String,
    pub user_id: u32,
    pub user: String,
    pub rented_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
}

impl RentDto {
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }
}

impl From<RentSummary> for RentDto {
    fn from(value: RentSummary) -> Self {
        let DestructRentSummary {
            id,
            isbn,
            title,
            user_id,
            user,
            rented_at,
            returned_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            isbn: isbn.into(),
            title: title.into(),
            user_id: user_id.into(),
            user,
            rented_at: rented_at.into(),
            returned_at: returned_at.map(Into::into),
        }
    }
}

pub struct GetRentDto {
    pub id: Uuid,
}

pub struct GetRentFromBookIsbnDto {
    pub isbn: String,
}

pub struct GetRentFromUserIdDto {
    pub user_id: u32,
}

pub struct CreateRentDto {
    pub isbn: String,
    pub user_id: u32,
}

pub struct ReturnRentDto {
    pub id: Uuid,
}
