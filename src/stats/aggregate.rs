//! Raw aggregation engine.
//!
//! Grouped integer counts over the Game→Match join, restricted to
//! qualifying matches. Groupings exist for the player hero's faction,
//! the player hero, and the (player hero, opponent hero) pairing. Rows
//! whose hero or faction references cannot be resolved are dropped, the
//! same way an inner join would drop them. Entities with zero qualifying
//! games never appear in a result map.

use std::collections::HashMap;

use crate::models::{
    Faction, FactionId, Game, GameStatus, Hero, HeroId, Match, MatchType,
};

use super::filter::StatsFilter;

/// Exact integer tallies for one grouping key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameCounts {
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub tournament_games: u32,
    pub tournament_wins: u32,
    pub friendly_games: u32,
    pub friendly_wins: u32,
}

impl GameCounts {
    /// Tally one game.
    pub fn record(&mut self, status: GameStatus, match_type: MatchType) {
        self.total += 1;
        match status {
            GameStatus::Win => self.wins += 1,
            GameStatus::Loss => self.losses += 1,
            GameStatus::Draw => self.draws += 1,
        }
        match match_type {
            MatchType::Tournament => {
                self.tournament_games += 1;
                if status == GameStatus::Win {
                    self.tournament_wins += 1;
                }
            }
            MatchType::Friendly => {
                self.friendly_games += 1;
                if status == GameStatus::Win {
                    self.friendly_wins += 1;
                }
            }
        }
    }
}

/// Tallies for one hero-vs-opponent pairing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairCounts {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl PairCounts {
    /// Tally one game.
    pub fn record(&mut self, status: GameStatus) {
        self.games += 1;
        match status {
            GameStatus::Win => self.wins += 1,
            GameStatus::Loss => self.losses += 1,
            GameStatus::Draw => self.draws += 1,
        }
    }
}

/// A hero's overall tallies plus its per-opponent pairings, accumulated
/// from the same row set so pairing sums always equal the hero totals.
#[derive(Debug, Clone, Default)]
pub struct HeroPairings {
    pub counts: GameCounts,
    pub pairings: HashMap<HeroId, PairCounts>,
}

/// Index matches that pass the filter, keyed by id.
pub fn qualifying_matches<'a>(
    matches: &'a [Match],
    filter: &StatsFilter,
) -> HashMap<&'a str, &'a Match> {
    matches
        .iter()
        .filter(|m| filter.qualifies(m))
        .map(|m| (m.id.as_str(), m))
        .collect()
}

/// Index heroes by id.
pub fn heroes_by_id(heroes: &[Hero]) -> HashMap<&str, &Hero> {
    heroes.iter().map(|h| (h.id.as_str(), h)).collect()
}

/// Index factions by id.
pub fn factions_by_id(factions: &[Faction]) -> HashMap<&str, &Faction> {
    factions.iter().map(|f| (f.id.as_str(), f)).collect()
}

/// Group qualifying games by the player hero's faction.
pub fn games_by_faction(
    games: &[Game],
    matches: &HashMap<&str, &Match>,
    heroes: &HashMap<&str, &Hero>,
    factions: &HashMap<&str, &Faction>,
) -> HashMap<FactionId, GameCounts> {
    let mut counts: HashMap<FactionId, GameCounts> = HashMap::new();

    for game in games {
        let Some(m) = matches.get(game.match_id.as_str()) else {
            continue;
        };
        let Some(hero) = heroes.get(game.player_hero_id.as_str()) else {
            continue;
        };
        if !factions.contains_key(hero.faction_id.as_str()) {
            continue;
        }
        counts
            .entry(hero.faction_id.clone())
            .or_default()
            .record(game.game_status, m.match_type);
    }

    counts
}

/// Group qualifying games by the player hero.
///
/// Drops games whose player hero or its faction cannot be resolved; the
/// opponent side is irrelevant to this grouping.
pub fn games_by_hero(
    games: &[Game],
    matches: &HashMap<&str, &Match>,
    heroes: &HashMap<&str, &Hero>,
    factions: &HashMap<&str, &Faction>,
) -> HashMap<HeroId, GameCounts> {
    let mut counts: HashMap<HeroId, GameCounts> = HashMap::new();

    for game in games {
        let Some(m) = matches.get(game.match_id.as_str()) else {
            continue;
        };
        let Some(hero) = heroes.get(game.player_hero_id.as_str()) else {
            continue;
        };
        if !factions.contains_key(hero.faction_id.as_str()) {
            continue;
        }
        counts
            .entry(hero.id.clone())
            .or_default()
            .record(game.game_status, m.match_type);
    }

    counts
}

/// Group qualifying games by (player hero, opponent hero) pairing,
/// accumulating per-hero totals from the same rows.
///
/// A game where either side (or either side's faction) cannot be
/// resolved is dropped from both the pairing and the hero totals, so the
/// sum of pairing games always equals the hero's total.
pub fn games_by_pairing(
    games: &[Game],
    matches: &HashMap<&str, &Match>,
    heroes: &HashMap<&str, &Hero>,
    factions: &HashMap<&str, &Faction>,
) -> HashMap<HeroId, HeroPairings> {
    let mut grouped: HashMap<HeroId, HeroPairings> = HashMap::new();

    for game in games {
        let Some(m) = matches.get(game.match_id.as_str()) else {
            continue;
        };
        let Some(hero) = heroes.get(game.player_hero_id.as_str()) else {
            continue;
        };
        let Some(opponent) = heroes.get(game.opponent_hero_id.as_str()) else {
            continue;
        };
        if !factions.contains_key(hero.faction_id.as_str())
            || !factions.contains_key(opponent.faction_id.as_str())
        {
            continue;
        }

        let entry = grouped.entry(hero.id.clone()).or_default();
        entry.counts.record(game.game_status, m.match_type);
        entry
            .pairings
            .entry(opponent.id.clone())
            .or_default()
            .record(game.game_status);
    }

    grouped
}
