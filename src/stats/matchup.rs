//! Matchup engine.
//!
//! Pairwise hero-vs-opponent records, plus each hero's best and worst
//! three opponents by win rate. Both lists tie-break on games played
//! (descending) so matchups with more data outrank thin samples, then
//! on opponent id for reproducible output.

use std::collections::HashMap;

use crate::models::{Faction, Hero, HeroId, HeroMatchupStat, Matchup};

use super::aggregate::HeroPairings;
use super::ranking::percentage;

/// Matchups kept per hero in each direction.
pub const MATCHUP_DEPTH: usize = 3;

fn pairing_rows(
    pairings: HashMap<HeroId, super::aggregate::PairCounts>,
    heroes: &HashMap<&str, &Hero>,
    factions: &HashMap<&str, &Faction>,
) -> Vec<Matchup> {
    pairings
        .into_iter()
        .filter_map(|(opponent_id, p)| {
            let opponent = heroes.get(opponent_id.as_str())?;
            let faction = factions.get(opponent.faction_id.as_str())?;
            Some(Matchup {
                opponent_hero_id: opponent_id,
                opponent_hero_name: opponent.name.clone(),
                opponent_faction_name: faction.name.clone(),
                opponent_faction_color: faction.color_code.clone(),
                games_played: p.games,
                wins: p.wins,
                losses: p.losses,
                draws: p.draws,
                win_rate: percentage(p.wins, p.games),
            })
        })
        .collect()
}

fn best_of(rows: &[Matchup]) -> Vec<Matchup> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        b.win_rate
            .total_cmp(&a.win_rate)
            .then_with(|| b.games_played.cmp(&a.games_played))
            .then_with(|| a.opponent_hero_id.cmp(&b.opponent_hero_id))
    });
    sorted.truncate(MATCHUP_DEPTH);
    sorted
}

fn worst_of(rows: &[Matchup]) -> Vec<Matchup> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        a.win_rate
            .total_cmp(&b.win_rate)
            .then_with(|| b.games_played.cmp(&a.games_played))
            .then_with(|| a.opponent_hero_id.cmp(&b.opponent_hero_id))
    });
    sorted.truncate(MATCHUP_DEPTH);
    sorted
}

/// Build the matchup rows for every hero with at least one qualifying
/// game. Hero order is games played, then win rate, then hero id,
/// truncated to `limit` after sorting.
pub fn rank_matchups(
    grouped: HashMap<HeroId, HeroPairings>,
    heroes: &HashMap<&str, &Hero>,
    factions: &HashMap<&str, &Faction>,
    limit: usize,
) -> Vec<HeroMatchupStat> {
    let mut rows: Vec<HeroMatchupStat> = grouped
        .into_iter()
        .filter_map(|(hero_id, hp)| {
            let hero = heroes.get(hero_id.as_str())?;
            let faction = factions.get(hero.faction_id.as_str())?;
            let pairings = pairing_rows(hp.pairings, heroes, factions);
            Some(HeroMatchupStat {
                hero_id,
                hero_name: hero.name.clone(),
                faction_name: faction.name.clone(),
                faction_color: faction.color_code.clone(),
                total_games: hp.counts.total,
                win_rate: percentage(hp.counts.wins, hp.counts.total),
                total_wins: hp.counts.wins,
                total_losses: hp.counts.losses,
                total_draws: hp.counts.draws,
                best_matchups: best_of(&pairings),
                worst_matchups: worst_of(&pairings),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_games
            .cmp(&a.total_games)
            .then_with(|| b.win_rate.total_cmp(&a.win_rate))
            .then_with(|| a.hero_id.cmp(&b.hero_id))
    });
    rows.truncate(limit);
    rows
}
