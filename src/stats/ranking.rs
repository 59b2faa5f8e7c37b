//! Ratio and ranking layer.
//!
//! Converts raw counts into response rows with guarded win rates, then
//! sorts and truncates. Faction summaries order by games played first;
//! hero win-rate lists order by win rate first. Both chains end on the
//! entity id so repeated identical queries return identical output.

use std::collections::HashMap;

use crate::models::{Faction, FactionId, FactionStat, Hero, HeroId, HeroWinRate};

use super::aggregate::GameCounts;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `part` in `whole`, rounded to two decimals.
/// Returns 0.0 when the denominator is zero; never NaN or infinity.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole > 0 {
        round2(part as f64 / whole as f64 * 100.0)
    } else {
        0.0
    }
}

/// Build the faction summary rows: ordered by games played, then win
/// rate, then faction id, truncated to `limit` after sorting.
pub fn rank_factions(
    counts: HashMap<FactionId, GameCounts>,
    factions: &HashMap<&str, &Faction>,
    limit: usize,
) -> Vec<FactionStat> {
    let mut rows: Vec<FactionStat> = counts
        .into_iter()
        .filter_map(|(faction_id, c)| {
            let faction = factions.get(faction_id.as_str())?;
            Some(FactionStat {
                faction_id,
                faction_name: faction.name.clone(),
                faction_color: faction.color_code.clone(),
                total_games: c.total,
                wins: c.wins,
                losses: c.losses,
                draws: c.draws,
                win_rate: percentage(c.wins, c.total),
                tournament_games: c.tournament_games,
                friendly_games: c.friendly_games,
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_games
            .cmp(&a.total_games)
            .then_with(|| b.win_rate.total_cmp(&a.win_rate))
            .then_with(|| a.faction_id.cmp(&b.faction_id))
    });
    rows.truncate(limit);
    rows
}

/// Build the hero win-rate rows: ordered by win rate, then games played,
/// then hero id, truncated to `limit` after sorting. Tournament and
/// friendly rates are each guarded by their own subtotal denominator.
pub fn rank_heroes(
    counts: HashMap<HeroId, GameCounts>,
    heroes: &HashMap<&str, &Hero>,
    factions: &HashMap<&str, &Faction>,
    limit: usize,
) -> Vec<HeroWinRate> {
    let mut rows: Vec<HeroWinRate> = counts
        .into_iter()
        .filter_map(|(hero_id, c)| {
            let hero = heroes.get(hero_id.as_str())?;
            let faction = factions.get(hero.faction_id.as_str())?;
            Some(HeroWinRate {
                hero_id,
                hero_name: hero.name.clone(),
                faction_name: faction.name.clone(),
                faction_color: faction.color_code.clone(),
                total_games: c.total,
                wins: c.wins,
                losses: c.losses,
                draws: c.draws,
                win_rate: percentage(c.wins, c.total),
                tournament_win_rate: percentage(c.tournament_wins, c.tournament_games),
                friendly_win_rate: percentage(c.friendly_wins, c.friendly_games),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.win_rate
            .total_cmp(&a.win_rate)
            .then_with(|| b.total_games.cmp(&a.total_games))
            .then_with(|| a.hero_id.cmp(&b.hero_id))
    });
    rows.truncate(limit);
    rows
}
