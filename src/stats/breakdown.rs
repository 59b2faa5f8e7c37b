//! Match-type breakdown.
//!
//! Match-level (not game-level) aggregation: per-type match and game
//! counts, average games per match, the share of matches won, the
//! most-played format, and a combined summary across both types.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{
    CombinedSummary, Game, Match, MatchFormat, MatchStatus, MatchType, MatchTypeStats, TypeSummary,
};

use super::filter::StatsFilter;
use super::ranking::{percentage, round2};

fn summarize(
    match_type: MatchType,
    matches: &[&Match],
    games_per_match: &HashMap<&str, u32>,
) -> TypeSummary {
    if matches.is_empty() {
        return TypeSummary::empty(match_type);
    }

    let total_matches = matches.len() as u32;
    let total_games: u32 = matches
        .iter()
        .map(|m| games_per_match.get(m.id.as_str()).copied().unwrap_or(0))
        .sum();
    let match_wins = matches
        .iter()
        .filter(|m| m.match_status == MatchStatus::Win)
        .count() as u32;

    let mut format_breakdown: BTreeMap<MatchFormat, u32> = BTreeMap::new();
    for m in matches {
        *format_breakdown.entry(m.match_format).or_default() += 1;
    }

    // BTreeMap iterates in format order, so a strict ">" keeps the
    // alphabetically-first format on a count tie.
    let mut most_played_format = MatchFormat::Bo1;
    let mut best_count = 0;
    for (format, count) in &format_breakdown {
        if *count > best_count {
            best_count = *count;
            most_played_format = *format;
        }
    }

    TypeSummary {
        match_type,
        total_matches,
        total_games,
        average_games_per_match: round2(total_games as f64 / total_matches as f64),
        win_rate: percentage(match_wins, total_matches),
        most_played_format,
        format_breakdown,
    }
}

/// Compute the full per-type breakdown plus the combined summary over
/// the qualifying matches.
pub fn match_type_breakdown(
    matches: &[Match],
    games: &[Game],
    filter: &StatsFilter,
) -> MatchTypeStats {
    let qualifying: Vec<&Match> = matches.iter().filter(|m| filter.qualifies(m)).collect();

    let qualifying_ids: std::collections::HashSet<&str> =
        qualifying.iter().map(|m| m.id.as_str()).collect();
    let mut games_per_match: HashMap<&str, u32> = HashMap::new();
    for game in games {
        if qualifying_ids.contains(game.match_id.as_str()) {
            *games_per_match.entry(game.match_id.as_str()).or_default() += 1;
        }
    }

    let tournament_matches: Vec<&Match> = qualifying
        .iter()
        .copied()
        .filter(|m| m.match_type == MatchType::Tournament)
        .collect();
    let friendly_matches: Vec<&Match> = qualifying
        .iter()
        .copied()
        .filter(|m| m.match_type == MatchType::Friendly)
        .collect();

    let tournament = summarize(MatchType::Tournament, &tournament_matches, &games_per_match);
    let friendly = summarize(MatchType::Friendly, &friendly_matches, &games_per_match);

    let total_matches = qualifying.len() as u32;
    let total_wins = qualifying
        .iter()
        .filter(|m| m.match_status == MatchStatus::Win)
        .count() as u32;
    let unique_formats: BTreeSet<MatchFormat> =
        qualifying.iter().map(|m| m.match_format).collect();
    let total_games = tournament.total_games + friendly.total_games;

    MatchTypeStats {
        tournament,
        friendly,
        total: CombinedSummary {
            matches: total_matches,
            games: total_games,
            win_rate: percentage(total_wins, total_matches),
            unique_formats_count: unique_formats.len() as u32,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameStatus, HeroId};
    use crate::stats::filter::MatchTypeFilter;

    fn make_match(
        match_type: MatchType,
        format: MatchFormat,
        status: MatchStatus,
    ) -> Match {
        Match::new(
            match_type,
            format,
            status,
            "season-1".into(),
            "Opponent".to_string(),
        )
    }

    fn games_for(m: &Match, count: u32) -> Vec<Game> {
        (0..count)
            .map(|i| {
                Game::new(
                    m.id.clone(),
                    HeroId::from(format!("hero-{i}")),
                    HeroId::from("hero-opp"),
                    GameStatus::Win,
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_store() {
        let stats = match_type_breakdown(&[], &[], &StatsFilter::default());

        assert_eq!(stats.tournament, TypeSummary::empty(MatchType::Tournament));
        assert_eq!(stats.friendly, TypeSummary::empty(MatchType::Friendly));
        assert_eq!(stats.total.matches, 0);
        assert_eq!(stats.total.games, 0);
        assert_eq!(stats.total.win_rate, 0.0);
        assert_eq!(stats.total.unique_formats_count, 0);
    }

    #[test]
    fn test_zero_match_type_is_well_formed() {
        let m = make_match(MatchType::Tournament, MatchFormat::Bo3, MatchStatus::Win);
        let games = games_for(&m, 2);

        let stats = match_type_breakdown(&[m], &games, &StatsFilter::default());

        assert_eq!(stats.friendly.total_matches, 0);
        assert_eq!(stats.friendly.total_games, 0);
        assert_eq!(stats.friendly.average_games_per_match, 0.0);
        assert_eq!(stats.friendly.win_rate, 0.0);
        assert_eq!(stats.friendly.most_played_format, MatchFormat::Bo1);
        assert!(stats.friendly.format_breakdown.is_empty());
    }

    #[test]
    fn test_per_type_counts() {
        let t1 = make_match(MatchType::Tournament, MatchFormat::Bo3, MatchStatus::Win);
        let t2 = make_match(MatchType::Tournament, MatchFormat::Bo3, MatchStatus::Loss);
        let f1 = make_match(MatchType::Friendly, MatchFormat::Bo1, MatchStatus::Draw);

        let mut games = games_for(&t1, 3);
        games.extend(games_for(&t2, 2));
        games.extend(games_for(&f1, 1));

        let stats = match_type_breakdown(
            &[t1, t2, f1],
            &games,
            &StatsFilter::default(),
        );

        assert_eq!(stats.tournament.total_matches, 2);
        assert_eq!(stats.tournament.total_games, 5);
        assert_eq!(stats.tournament.average_games_per_match, 2.5);
        assert_eq!(stats.tournament.win_rate, 50.0);
        assert_eq!(stats.tournament.most_played_format, MatchFormat::Bo3);
        assert_eq!(stats.tournament.format_breakdown[&MatchFormat::Bo3], 2);

        assert_eq!(stats.friendly.total_matches, 1);
        assert_eq!(stats.friendly.total_games, 1);
        assert_eq!(stats.friendly.win_rate, 0.0);

        assert_eq!(stats.total.matches, 3);
        assert_eq!(stats.total.games, 6);
        assert_eq!(stats.total.win_rate, 33.33);
        assert_eq!(stats.total.unique_formats_count, 2);
    }

    #[test]
    fn test_win_rate_counts_matches_not_games() {
        // One won match with many games that were mostly losses at the
        // game level; the breakdown only looks at match status.
        let m1 = make_match(MatchType::Friendly, MatchFormat::Bo7, MatchStatus::Win);
        let m2 = make_match(MatchType::Friendly, MatchFormat::Bo7, MatchStatus::Loss);
        let mut games = games_for(&m1, 7);
        games.extend(games_for(&m2, 7));

        let stats = match_type_breakdown(&[m1, m2], &games, &StatsFilter::default());
        assert_eq!(stats.friendly.win_rate, 50.0);
        assert_eq!(stats.friendly.total_games, 14);
    }

    #[test]
    fn test_format_tie_breaks_alphabetically() {
        let m1 = make_match(MatchType::Friendly, MatchFormat::Bo5, MatchStatus::Win);
        let m2 = make_match(MatchType::Friendly, MatchFormat::Bo3, MatchStatus::Win);

        let stats = match_type_breakdown(&[m1, m2], &[], &StatsFilter::default());
        assert_eq!(stats.friendly.most_played_format, MatchFormat::Bo3);
    }

    #[test]
    fn test_in_progress_matches_excluded() {
        let done = make_match(MatchType::Tournament, MatchFormat::Bo3, MatchStatus::Win);
        let running =
            make_match(MatchType::Tournament, MatchFormat::Bo5, MatchStatus::InProgress);
        let mut games = games_for(&done, 2);
        games.extend(games_for(&running, 1));

        let stats = match_type_breakdown(&[done, running], &games, &StatsFilter::default());
        assert_eq!(stats.tournament.total_matches, 1);
        assert_eq!(stats.tournament.total_games, 2);
        assert_eq!(stats.total.unique_formats_count, 1);
    }

    #[test]
    fn test_match_type_filter_zeroes_other_type() {
        let t = make_match(MatchType::Tournament, MatchFormat::Bo3, MatchStatus::Win);
        let f = make_match(MatchType::Friendly, MatchFormat::Bo1, MatchStatus::Win);

        let filter = StatsFilter::default().with_match_type(MatchTypeFilter::Tournament);
        let stats = match_type_breakdown(&[t, f], &[], &filter);

        assert_eq!(stats.tournament.total_matches, 1);
        assert_eq!(stats.friendly.total_matches, 0);
        assert_eq!(stats.total.matches, 1);
    }

    #[test]
    fn test_match_with_no_games() {
        let m = make_match(MatchType::Friendly, MatchFormat::Bo1, MatchStatus::Win);
        let stats = match_type_breakdown(&[m], &[], &StatsFilter::default());

        assert_eq!(stats.friendly.total_matches, 1);
        assert_eq!(stats.friendly.total_games, 0);
        assert_eq!(stats.friendly.average_games_per_match, 0.0);
    }
}
