use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct SelectLimit(usize);

impl SelectLimit {
    pub fn new(value: impl Into<usize>) -> Self {
        SelectLimit(value.into())
    }
}

impl Default for SelectLimit {
    fn default() -> Self {
        Self::new(30usize)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct SelectOffset(usize);

impl SelectOffset {
    pub fn new(value: impl Into<usize>) -> Self {
        SelectOffset(value.into())
    }
}
