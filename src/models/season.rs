//! Season model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityId, SeasonId};

/// A time-bounded grouping for matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    /// Unique identifier (derived from name + start date)
    pub id: SeasonId,

    /// Season name (e.g., "Winter 2026")
    pub name: String,

    /// First day of the season
    pub start_date: NaiveDate,

    /// Last day of the season
    pub end_date: NaiveDate,
}

impl Season {
    /// Create a new Season with auto-generated ID.
    pub fn new(name: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let id = EntityId::generate(&["season", &name, &start_date.to_string()]);
        Self {
            id,
            name,
            start_date,
            end_date,
        }
    }
}
