//! FZL Splits Storage Layer
//!
//! SQLite-backed key/value store standing in for browser local storage.
//! Every value is a JSON string under a fixed key.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
