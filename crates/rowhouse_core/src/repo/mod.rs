//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define per-store data access contracts over borrowed connections.
//! - Isolate SQL details from drivers and the import pipeline.
//!
//! # Invariants
//! - Write paths enforce record validation before any SQL runs.
//! - A read that matches nothing yields `Ok(None)` or an empty vector,
//!   never an error.
//! - Updates and deletes aimed at an absent id report zero affected rows
//!   and succeed.

pub mod dog_repo;
pub mod game_repo;
pub mod lookup;
pub mod task_repo;

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;
use crate::model::InvalidValue;

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure surface shared by every store repository.
#[derive(Debug)]
pub enum RepoError {
    /// A record or parameter failed a domain check; no SQL ran.
    Invalid(InvalidValue),
    /// The store rejected a statement: constraint violation, I/O failure,
    /// lock contention. Propagated as-is, never retried here.
    Persistence(DbError),
    /// A persisted row cannot be mapped back into a record.
    Corrupt(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Persistence(err) => write!(f, "{err}"),
            Self::Corrupt(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Persistence(err) => Some(err),
            Self::Corrupt(_) => None,
        }
    }
}

impl From<InvalidValue> for RepoError {
    fn from(value: InvalidValue) -> Self {
        Self::Invalid(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Persistence(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Persistence(DbError::Sqlite(value))
    }
}

/// Escapes LIKE wildcards so user text matches literally.
///
/// Callers append their own `%` anchors and must pass the pattern to a
/// `LIKE ... ESCAPE '\'` clause.
pub(crate) fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
