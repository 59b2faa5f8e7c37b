//! Aggregate response shapes.
//!
//! Field names are contractual for the presentation layer, camelCase on
//! the wire. Every rate field is a percentage in [0, 100] rounded to two
//! decimals, 0.0 when its denominator is zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{FactionId, HeroId, MatchFormat, MatchType};

/// Per-faction game statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionStat {
    pub faction_id: FactionId,
    pub faction_name: String,
    pub faction_color: String,
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_rate: f64,
    pub tournament_games: u32,
    pub friendly_games: u32,
}

/// Per-hero win-rate statistics, with independent tournament/friendly rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroWinRate {
    pub hero_id: HeroId,
    pub hero_name: String,
    pub faction_name: String,
    pub faction_color: String,
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_rate: f64,
    pub tournament_win_rate: f64,
    pub friendly_win_rate: f64,
}

/// One hero-vs-opponent-hero pairing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub opponent_hero_id: HeroId,
    pub opponent_hero_name: String,
    pub opponent_faction_name: String,
    pub opponent_faction_color: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_rate: f64,
}

/// A hero's overall record plus its best and worst opponent pairings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroMatchupStat {
    pub hero_id: HeroId,
    pub hero_name: String,
    pub faction_name: String,
    pub faction_color: String,
    pub total_games: u32,
    pub win_rate: f64,
    pub total_wins: u32,
    pub total_losses: u32,
    pub total_draws: u32,
    pub best_matchups: Vec<Matchup>,
    pub worst_matchups: Vec<Matchup>,
}

/// Match-level summary for one match type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSummary {
    pub match_type: MatchType,
    pub total_matches: u32,
    pub total_games: u32,
    pub average_games_per_match: f64,
    /// Fraction of matches (not games) won, as a percentage.
    pub win_rate: f64,
    pub most_played_format: MatchFormat,
    pub format_breakdown: BTreeMap<MatchFormat, u32>,
}

impl TypeSummary {
    /// Well-formed zero record for a type with no qualifying matches.
    /// Numeric fields are 0 and mostPlayedFormat falls back to BO1 so
    /// consumers never branch on missing fields.
    pub fn empty(match_type: MatchType) -> Self {
        Self {
            match_type,
            total_matches: 0,
            total_games: 0,
            average_games_per_match: 0.0,
            win_rate: 0.0,
            most_played_format: MatchFormat::Bo1,
            format_breakdown: BTreeMap::new(),
        }
    }
}

/// Combined summary across both match types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedSummary {
    pub matches: u32,
    pub games: u32,
    pub win_rate: f64,
    pub unique_formats_count: u32,
}

/// Full match-type breakdown response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTypeStats {
    pub tournament: TypeSummary,
    pub friendly: TypeSummary,
    pub total: CombinedSummary,
}
