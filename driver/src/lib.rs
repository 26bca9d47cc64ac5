pub mod database;
mod error;
