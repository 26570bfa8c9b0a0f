//! Dog record for the kennel store.
//!
//! # Invariants
//! - `breed` is carried by name; the repository resolves it to a dimension
//!   row on write and joins it back on read.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::model::{require_text, InvalidValue};

/// Store-assigned surrogate key for a dog row.
pub type DogId = i64;

/// A registered dog with its breed denormalized to a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dog {
    /// `None` until the store assigns an id on insert.
    pub id: Option<DogId>,
    pub name: String,
    /// Whole years; callers bump it via [`Dog::increment_age`].
    pub age: i64,
    pub breed: String,
}

impl Dog {
    /// Creates a fresh, not-yet-persisted dog.
    pub fn new(name: impl Into<String>, age: i64, breed: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            breed: breed.into(),
        }
    }

    /// Reconstructs a persisted dog from store-owned values.
    pub fn with_id(id: DogId, name: impl Into<String>, age: i64, breed: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            age,
            breed: breed.into(),
        }
    }

    /// Adds one year, as recorded on a birthday.
    pub fn increment_age(&mut self) {
        self.age += 1;
    }

    /// Checks required fields before an insert or update.
    pub fn validate(&self) -> Result<(), InvalidValue> {
        require_text("name", &self.name)?;
        require_text("breed", &self.breed)
    }
}

impl Display for Dog {
    /// Renders like `[id: 3] Rex, a 4 year old Boxer`, omitting the id
    /// bracket for dogs that were never persisted.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = self.id {
            write!(f, "[id: {id}] ")?;
        }
        write!(f, "{}, a {} year old {}", self.name, self.age, self.breed)
    }
}
