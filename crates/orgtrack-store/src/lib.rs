#![forbid(unsafe_code)]

//! SQLite persistence for the orgtrack registry.
//!
//! The store exclusively owns all records: every read re-queries SQLite and
//! there is no in-process cache. Writes are single-row, single-transaction,
//! last-write-wins. Referential integrity is enforced by explicit
//! `ON DELETE RESTRICT` foreign keys (see [`schema::SCHEMA_SQL`]).

use std::fmt::{Display, Formatter};

pub mod crud;
pub mod schema;
pub mod seed;

pub use schema::{open_in_memory, open_registry, SCHEMA_VERSION};

pub const CRATE_NAME: &str = "orgtrack-store";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed row does not exist.
    NotFound,
    /// A UNIQUE constraint fired; the payload is the constraint description
    /// reported by SQLite (e.g. `student.student_id`).
    Unique(String),
    /// A foreign key was violated: either a reference to a missing row, or
    /// a delete of a row that is still referenced.
    ForeignKey(String),
    Sqlite(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str("row not found"),
            Self::Unique(msg) | Self::ForeignKey(msg) | Self::Sqlite(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    pub(crate) fn classify(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::QueryReturnedNoRows => Self::NotFound,
            rusqlite::Error::SqliteFailure(code, message) => {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| "constraint violation".to_string());
                match code.extended_code {
                    rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Self::Unique(msg),
                    rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
                    | rusqlite::ffi::SQLITE_CONSTRAINT_TRIGGER => Self::ForeignKey(msg),
                    _ => Self::Sqlite(err.to_string()),
                }
            }
            _ => Self::Sqlite(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::classify(err)
    }
}

impl From<orgtrack_model::ValidationError> for StoreError {
    fn from(err: orgtrack_model::ValidationError) -> Self {
        Self::Sqlite(err.to_string())
    }
}
