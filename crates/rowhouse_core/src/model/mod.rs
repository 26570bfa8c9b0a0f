//! Record types persisted by the rowhouse stores.
//!
//! # Responsibility
//! - Define the value objects repositories write and reconstruct.
//! - Enforce field domains at assignment time, not at persistence time.
//!
//! # Invariants
//! - A record's surrogate id is unset until the store assigns one, and a
//!   store-assigned id never changes afterwards.
//! - Domain checks never touch connection state.

pub mod dog;
pub mod game;
pub mod order;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// A field was given a value outside its allowed domain.
///
/// Raised synchronously by validating setters and constructors, and by
/// repository `create` paths for required-field checks. No SQL has run by
/// the time this error is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    /// Integer-coded boolean outside {0, 1}.
    FlagOutOfRange { field: &'static str, value: i64 },
    /// Required text field is empty or blank.
    EmptyField { field: &'static str },
}

impl Display for InvalidValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FlagOutOfRange { field, value } => {
                write!(f, "{field} must be 0 or 1, received {value}")
            }
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl Error for InvalidValue {}

/// Checks a required text field and reports which one was blank.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), InvalidValue> {
    if value.trim().is_empty() {
        return Err(InvalidValue::EmptyField { field });
    }
    Ok(())
}

/// Current wall-clock time in Unix epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
