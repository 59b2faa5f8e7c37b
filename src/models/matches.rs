//! Match model and its enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EntityId, MatchId, SeasonId};

/// Tournament or casual play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    Tournament,
    Friendly,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchType::Tournament => write!(f, "TOURNAMENT"),
            MatchType::Friendly => write!(f, "FRIENDLY"),
        }
    }
}

/// Best-of-N match format.
///
/// Variant order is alphabetical on the wire form, which doubles as the
/// deterministic tie-break for most-played-format counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchFormat {
    Bo1,
    Bo3,
    Bo5,
    Bo7,
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFormat::Bo1 => write!(f, "BO1"),
            MatchFormat::Bo3 => write!(f, "BO3"),
            MatchFormat::Bo5 => write!(f, "BO5"),
            MatchFormat::Bo7 => write!(f, "BO7"),
        }
    }
}

/// Overall outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Win,
    Loss,
    Draw,
    InProgress,
}

impl MatchStatus {
    /// Whether the match has a final result. IN_PROGRESS matches are
    /// incomplete data and are excluded from every statistic.
    pub fn is_completed(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

/// A recorded match against one opponent, containing one or more games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier
    pub id: MatchId,

    /// Tournament or friendly
    pub match_type: MatchType,

    /// Best-of-N format
    pub match_format: MatchFormat,

    /// Overall outcome
    pub match_status: MatchStatus,

    /// Season this match belongs to
    pub season_id: SeasonId,

    /// Event, for tournament matches
    pub event_id: Option<EntityId>,

    /// Recording player; None after anonymization
    pub player_id: Option<EntityId>,

    /// Opponent display name
    pub opponent_name: String,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Create a new Match with auto-generated ID.
    pub fn new(
        match_type: MatchType,
        match_format: MatchFormat,
        match_status: MatchStatus,
        season_id: SeasonId,
        opponent_name: String,
    ) -> Self {
        let created_at = Utc::now();
        let id = EntityId::generate(&[
            "match",
            season_id.as_str(),
            &opponent_name,
            &created_at.to_rfc3339(),
        ]);
        Self {
            id,
            match_type,
            match_format,
            match_status,
            season_id,
            event_id: None,
            player_id: None,
            opponent_name,
            created_at,
        }
    }

    /// Builder method to set the event.
    pub fn with_event(mut self, event_id: EntityId) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Builder method to pin the creation timestamp (fixtures, imports).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
