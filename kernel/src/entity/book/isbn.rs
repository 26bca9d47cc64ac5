use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Catalog-wide unique identifier of a book copy.
#[derive(
    Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct BookIsbn(String);

impl BookIsbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }
}
