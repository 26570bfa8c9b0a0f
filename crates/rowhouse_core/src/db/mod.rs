//! SQLite storage bootstrap for the rowhouse stores.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Lay down the fixed per-store schema before returning a usable
//!   connection.
//!
//! # Invariants
//! - Every DDL statement is idempotent (`CREATE TABLE IF NOT EXISTS`), so
//!   reopening an existing file is safe and never rewrites data.
//! - Core code must not read or write application data before the schema
//!   pass succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// A store's DDL batch failed; names the store so multi-store files
    /// stay diagnosable.
    Schema {
        store: &'static str,
        source: rusqlite::Error,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Schema { store, source } => {
                write!(f, "failed to apply schema for store `{store}`: {source}")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Schema { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
