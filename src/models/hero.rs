//! Hero reference model.

use serde::{Deserialize, Serialize};

use super::{EntityId, FactionId, HeroId};

/// A playable hero. Each hero belongs to exactly one faction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// Unique identifier (derived from name + faction)
    pub id: HeroId,

    /// Hero name
    pub name: String,

    /// Faction this hero belongs to
    pub faction_id: FactionId,

    /// Portrait used by the (out of scope) presentation layer
    pub image_url: Option<String>,
}

impl Hero {
    /// Create a new Hero with auto-generated ID.
    pub fn new(name: String, faction_id: FactionId) -> Self {
        let id = EntityId::generate(&["hero", &name, faction_id.as_str()]);
        Self {
            id,
            name,
            faction_id,
            image_url: None,
        }
    }

    /// Builder method to set the portrait URL.
    pub fn with_image_url(mut self, url: String) -> Self {
        self.image_url = Some(url);
        self
    }
}
