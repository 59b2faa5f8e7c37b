//! Game model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, GameId, HeroId, MatchId};

/// Outcome of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Win,
    Loss,
    Draw,
}

/// A single game inside a match. Always belongs to exactly one match;
/// season and match-type context come from the parent transitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier
    pub id: GameId,

    /// Parent match
    pub match_id: MatchId,

    /// Hero played by the recording player
    pub player_hero_id: HeroId,

    /// Hero played by the opponent
    pub opponent_hero_id: HeroId,

    /// Outcome from the recording player's perspective
    pub game_status: GameStatus,

    /// Free-form note
    pub comment: Option<String>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Create a new Game with auto-generated ID.
    pub fn new(
        match_id: MatchId,
        player_hero_id: HeroId,
        opponent_hero_id: HeroId,
        game_status: GameStatus,
    ) -> Self {
        let created_at = Utc::now();
        let id = EntityId::generate(&[
            "game",
            match_id.as_str(),
            player_hero_id.as_str(),
            opponent_hero_id.as_str(),
            &created_at.to_rfc3339(),
        ]);
        Self {
            id,
            match_id,
            player_hero_id,
            opponent_hero_id,
            game_status,
            comment: None,
            created_at,
        }
    }

    /// Builder method to set a comment.
    pub fn with_comment(mut self, comment: String) -> Self {
        self.comment = Some(comment);
        self
    }
}
