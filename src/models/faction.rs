//! Faction reference model.

use serde::{Deserialize, Serialize};

use super::{EntityId, FactionId};

/// A game faction. Stable reference entity; the store carries one row
/// per faction (6 in this domain).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faction {
    /// Unique identifier (derived from name)
    pub id: FactionId,

    /// Faction name
    pub name: String,

    /// Hex color used by chart rendering
    pub color_code: String,
}

impl Faction {
    /// Create a new Faction with auto-generated ID.
    pub fn new(name: String, color_code: String) -> Self {
        let id = EntityId::generate(&["faction", &name]);
        Self {
            id,
            name,
            color_code,
        }
    }
}
