use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Fromln,
    AsRefln,
    Serialize,
    Deserialize,
)]
pub struct RentedAt(OffsetDateTime);

impl RentedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }
}
