//! Statistics aggregation core.
//!
//! Pure read-only queries over the Match/Game/Hero/Faction relation:
//! faction summaries, hero win rates, hero-vs-hero matchups, and the
//! match-type breakdown. Each query takes a validated [`StatsFilter`],
//! loads only the tables it needs, and is stateless and idempotent;
//! identical filters over unchanged data return identical results,
//! ordering included.

use thiserror::Error;
use tracing::{debug, error};

use crate::models::{
    Faction, FactionStat, Game, Hero, HeroMatchupStat, HeroWinRate, Match, MatchTypeStats,
};
use crate::storage::{JsonlReader, StorageConfig, StorageError, Table};

pub mod aggregate;
pub mod breakdown;
pub mod filter;
pub mod matchup;
pub mod ranking;

pub use filter::{FilterError, MatchTypeFilter, StatsFilter, StatsFilterParams};

/// Errors from the query boundary.
///
/// Store detail is logged where the failure happens; the error that
/// crosses the boundary stays generic so no paths or query internals
/// leak into responses.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("aggregation failed")]
    Store(#[from] StorageError),
}

fn read_table<T: serde::de::DeserializeOwned>(
    storage: &StorageConfig,
    table: Table,
) -> Result<Vec<T>, StatsError> {
    JsonlReader::<T>::for_table(storage, table)
        .read_all()
        .map_err(|e| {
            error!("Failed to read {:?} table: {}", table, e);
            StatsError::Store(e)
        })
}

/// Per-faction game statistics, ordered by games played.
pub fn faction_stats(
    storage: &StorageConfig,
    filter: &StatsFilter,
) -> Result<Vec<FactionStat>, StatsError> {
    let factions: Vec<Faction> = read_table(storage, Table::Faction)?;
    let heroes: Vec<Hero> = read_table(storage, Table::Hero)?;
    let matches: Vec<Match> = read_table(storage, Table::Match)?;
    let games: Vec<Game> = read_table(storage, Table::Game)?;

    let matches_q = aggregate::qualifying_matches(&matches, filter);
    let heroes_idx = aggregate::heroes_by_id(&heroes);
    let factions_idx = aggregate::factions_by_id(&factions);

    let counts = aggregate::games_by_faction(&games, &matches_q, &heroes_idx, &factions_idx);
    debug!(
        "faction_stats: {} qualifying matches, {} factions with games",
        matches_q.len(),
        counts.len()
    );

    Ok(ranking::rank_factions(
        counts,
        &factions_idx,
        filter.limit as usize,
    ))
}

/// Per-hero win rates, ordered by win rate.
pub fn hero_win_rates(
    storage: &StorageConfig,
    filter: &StatsFilter,
) -> Result<Vec<HeroWinRate>, StatsError> {
    let factions: Vec<Faction> = read_table(storage, Table::Faction)?;
    let heroes: Vec<Hero> = read_table(storage, Table::Hero)?;
    let matches: Vec<Match> = read_table(storage, Table::Match)?;
    let games: Vec<Game> = read_table(storage, Table::Game)?;

    let matches_q = aggregate::qualifying_matches(&matches, filter);
    let heroes_idx = aggregate::heroes_by_id(&heroes);
    let factions_idx = aggregate::factions_by_id(&factions);

    let counts = aggregate::games_by_hero(&games, &matches_q, &heroes_idx, &factions_idx);
    debug!(
        "hero_win_rates: {} qualifying matches, {} heroes with games",
        matches_q.len(),
        counts.len()
    );

    Ok(ranking::rank_heroes(
        counts,
        &heroes_idx,
        &factions_idx,
        filter.limit as usize,
    ))
}

/// Per-hero matchup rivalries (best/worst opponents).
pub fn hero_matchups(
    storage: &StorageConfig,
    filter: &StatsFilter,
) -> Result<Vec<HeroMatchupStat>, StatsError> {
    let factions: Vec<Faction> = read_table(storage, Table::Faction)?;
    let heroes: Vec<Hero> = read_table(storage, Table::Hero)?;
    let matches: Vec<Match> = read_table(storage, Table::Match)?;
    let games: Vec<Game> = read_table(storage, Table::Game)?;

    let matches_q = aggregate::qualifying_matches(&matches, filter);
    let heroes_idx = aggregate::heroes_by_id(&heroes);
    let factions_idx = aggregate::factions_by_id(&factions);

    let grouped = aggregate::games_by_pairing(&games, &matches_q, &heroes_idx, &factions_idx);
    debug!(
        "hero_matchups: {} qualifying matches, {} heroes with pairings",
        matches_q.len(),
        grouped.len()
    );

    Ok(matchup::rank_matchups(
        grouped,
        &heroes_idx,
        &factions_idx,
        filter.limit as usize,
    ))
}

/// Tournament/friendly breakdown with combined totals. Only needs the
/// match and game tables.
pub fn match_type_stats(
    storage: &StorageConfig,
    filter: &StatsFilter,
) -> Result<MatchTypeStats, StatsError> {
    let matches: Vec<Match> = read_table(storage, Table::Match)?;
    let games: Vec<Game> = read_table(storage, Table::Game)?;

    debug!("match_type_stats: {} matches in store", matches.len());
    Ok(breakdown::match_type_breakdown(&matches, &games, filter))
}
