use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

use crate::entity::RentedAt;

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
pub struct ReturnedAt(OffsetDateTime);

impl ReturnedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    /// Current time, clamped so it never precedes the loan it closes.
    pub fn now_after(rented_at: &RentedAt) -> Self {
        Self(OffsetDateTime::now_utc().max(*rented_at.as_ref()))
    }
}
