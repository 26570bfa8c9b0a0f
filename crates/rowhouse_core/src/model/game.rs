//! Game record and sales figures for the arcade store.
//!
//! # Responsibility
//! - Carry a catalogued game with its dimension values denormalized to names.
//! - Keep regional sales figures nullable; source data marks gaps as `N/A`.
//!
//! # Invariants
//! - `release_year` is optional; an unknown year is `None`, never a sentinel.

use serde::Serialize;

use crate::model::{require_text, InvalidValue};

/// Store-assigned surrogate key for a game row.
pub type GameId = i64;

/// A catalogued game; platform, publisher and genre are dimension names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    /// `None` until the store assigns an id on insert.
    pub id: Option<GameId>,
    pub name: String,
    pub platform: String,
    pub publisher: String,
    pub genre: String,
    pub release_year: Option<i64>,
}

impl Game {
    /// Creates a fresh, not-yet-persisted game.
    pub fn new(
        name: impl Into<String>,
        platform: impl Into<String>,
        publisher: impl Into<String>,
        genre: impl Into<String>,
        release_year: Option<i64>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            platform: platform.into(),
            publisher: publisher.into(),
            genre: genre.into(),
            release_year,
        }
    }

    /// Reconstructs a persisted game from store-owned values.
    pub fn with_id(
        id: GameId,
        name: impl Into<String>,
        platform: impl Into<String>,
        publisher: impl Into<String>,
        genre: impl Into<String>,
        release_year: Option<i64>,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            platform: platform.into(),
            publisher: publisher.into(),
            genre: genre.into(),
            release_year,
        }
    }

    /// Checks required fields before an insert.
    pub fn validate(&self) -> Result<(), InvalidValue> {
        require_text("name", &self.name)?;
        require_text("platform", &self.platform)?;
        require_text("publisher", &self.publisher)?;
        require_text("genre", &self.genre)
    }
}

/// Regional sales for one game, in millions of units.
///
/// Every figure is optional because the source data uses `N/A` for gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct SalesFigures {
    pub na_sales: Option<f64>,
    pub eu_sales: Option<f64>,
    pub jp_sales: Option<f64>,
    pub other_sales: Option<f64>,
    pub global_sales: Option<f64>,
}
