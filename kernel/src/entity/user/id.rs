use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    Fromln,
    AsRefln,
)]
pub struct UserId(u32);

impl UserId {
    pub fn new(id: impl Into<u32>) -> Self {
        Self(id.into())
    }
}
