//! Bulk CSV import into the kennel, arcade and storefront stores.
//!
//! # Responsibility
//! - Stream CSV exports row by row into their store, resolving dimension
//!   rows on the way.
//!
//! # Invariants
//! - One CSV data row maps to one insert per target table; there is no
//!   batching and no retry.
//! - A malformed field aborts the run at that row with its line number;
//!   rows already written stay written.

pub mod csvfile;
pub mod dog_import;
pub mod game_import;
pub mod order_import;

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::import::csvfile::CsvError;
use crate::repo::RepoError;

/// Outcome of a completed import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// CSV data rows consumed, header excluded.
    pub rows: u64,
}

/// Failure surface of the import pipeline.
#[derive(Debug)]
pub enum ImportError {
    /// The file could not be read or parsed as CSV.
    Csv(CsvError),
    /// A field failed to parse as its target type; names the 1-based line.
    BadField {
        line: u64,
        column: &'static str,
        value: String,
    },
    /// The store rejected an insert.
    Repo(RepoError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "{err}"),
            Self::BadField {
                line,
                column,
                value,
            } => write!(f, "line {line}: cannot parse {column} value `{value}`"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::BadField { .. } => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<CsvError> for ImportError {
    fn from(value: CsvError) -> Self {
        Self::Csv(value)
    }
}

impl From<RepoError> for ImportError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<rusqlite::Error> for ImportError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Repo(RepoError::from(value))
    }
}

pub(crate) fn required_i64(
    line: u64,
    column: &'static str,
    value: &str,
) -> Result<i64, ImportError> {
    value.trim().parse().map_err(|_| ImportError::BadField {
        line,
        column,
        value: value.to_string(),
    })
}

pub(crate) fn required_f64(
    line: u64,
    column: &'static str,
    value: &str,
) -> Result<f64, ImportError> {
    value.trim().parse().map_err(|_| ImportError::BadField {
        line,
        column,
        value: value.to_string(),
    })
}

/// Parses an integer column where the export writes `N/A` for gaps.
pub(crate) fn optional_i64(
    line: u64,
    column: &'static str,
    value: &str,
) -> Result<Option<i64>, ImportError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "N/A" {
        return Ok(None);
    }
    required_i64(line, column, trimmed).map(Some)
}

/// Parses a float column where the export writes `N/A` for gaps.
pub(crate) fn optional_f64(
    line: u64,
    column: &'static str,
    value: &str,
) -> Result<Option<f64>, ImportError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "N/A" {
        return Ok(None);
    }
    required_f64(line, column, trimmed).map(Some)
}

/// Parses the storefront export's `MM-DD-YYYY` date format.
pub(crate) fn date_mdy(
    line: u64,
    column: &'static str,
    value: &str,
) -> Result<NaiveDate, ImportError> {
    NaiveDate::parse_from_str(value.trim(), "%m-%d-%Y").map_err(|_| ImportError::BadField {
        line,
        column,
        value: value.to_string(),
    })
}
