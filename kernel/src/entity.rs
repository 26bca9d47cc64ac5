mod book;
mod common;
mod rent;
mod user;

pub use self::{book::*, common::*, rent::*, user::*};
