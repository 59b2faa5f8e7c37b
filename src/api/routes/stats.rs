use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{FactionStat, HeroMatchupStat, HeroWinRate, MatchTypeStats};
use crate::stats::{self, StatsError, StatsFilter, StatsFilterParams};

/// GET /api/stats/factions
pub async fn faction_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsFilterParams>,
) -> Result<Json<Vec<FactionStat>>, ApiError> {
    let filter = StatsFilter::from_params(&params)?;
    let rows = stats::faction_stats(&state.storage, &filter)?;
    Ok(Json(rows))
}

/// GET /api/stats/win-rates
pub async fn hero_win_rates(
    State(state): State<AppState>,
    Query(params): Query<StatsFilterParams>,
) -> Result<Json<Vec<HeroWinRate>>, ApiError> {
    let filter = StatsFilter::from_params(&params)?;
    let rows = stats::hero_win_rates(&state.storage, &filter)?;
    Ok(Json(rows))
}

/// GET /api/stats/matchups
pub async fn hero_matchups(
    State(state): State<AppState>,
    Query(params): Query<StatsFilterParams>,
) -> Result<Json<Vec<HeroMatchupStat>>, ApiError> {
    let filter = StatsFilter::from_params(&params)?;
    let rows = stats::hero_matchups(&state.storage, &filter)?;
    Ok(Json(rows))
}

/// GET /api/stats/match-types
pub async fn match_type_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsFilterParams>,
) -> Result<Json<MatchTypeStats>, ApiError> {
    let filter = StatsFilter::from_params(&params)?;
    let stats = stats::match_type_stats(&state.storage, &filter)?;
    Ok(Json(stats))
}

/// All four aggregations for one dashboard view. Sections are
/// independent; a failed one serializes as null while its siblings
/// succeed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub factions: Option<Vec<FactionStat>>,
    pub win_rates: Option<Vec<HeroWinRate>>,
    pub matchups: Option<Vec<HeroMatchupStat>>,
    pub match_types: Option<MatchTypeStats>,
}

fn section<T>(
    name: &str,
    joined: Result<Result<T, StatsError>, tokio::task::JoinError>,
) -> Option<T> {
    match joined {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            warn!("Overview section '{}' failed: {}", name, e);
            None
        }
        Err(e) => {
            warn!("Overview section '{}' join failed: {}", name, e);
            None
        }
    }
}

/// GET /api/stats/overview
pub async fn overview(
    State(state): State<AppState>,
    Query(params): Query<StatsFilterParams>,
) -> Result<Json<OverviewResponse>, ApiError> {
    let filter = StatsFilter::from_params(&params)?;

    let factions_task = {
        let storage = state.storage.clone();
        let filter = filter.clone();
        tokio::task::spawn_blocking(move || stats::faction_stats(&storage, &filter))
    };
    let win_rates_task = {
        let storage = state.storage.clone();
        let filter = filter.clone();
        tokio::task::spawn_blocking(move || stats::hero_win_rates(&storage, &filter))
    };
    let matchups_task = {
        let storage = state.storage.clone();
        let filter = filter.clone();
        tokio::task::spawn_blocking(move || stats::hero_matchups(&storage, &filter))
    };
    let match_types_task = {
        let storage = state.storage.clone();
        let filter = filter.clone();
        tokio::task::spawn_blocking(move || stats::match_type_stats(&storage, &filter))
    };

    let (factions, win_rates, matchups, match_types) = tokio::join!(
        factions_task,
        win_rates_task,
        matchups_task,
        match_types_task
    );

    Ok(Json(OverviewResponse {
        factions: section("factions", factions),
        win_rates: section("winRates", win_rates),
        matchups: section("matchups", matchups),
        match_types: section("matchTypes", match_types),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::models::{
        Faction, Game, GameStatus, Hero, Match, MatchFormat, MatchStatus, MatchType, Season,
    };
    use crate::storage::{JsonlWriter, StorageConfig, Table};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    struct Seeded {
        state: AppState,
        season: Season,
    }

    fn seed_state(dir: &std::path::Path) -> Seeded {
        let storage = StorageConfig::new(dir.to_path_buf());

        let crimson = Faction::new("Crimson Order".to_string(), "#c0392b".to_string());
        let azure = Faction::new("Azure Pact".to_string(), "#2980b9".to_string());
        let sierra = Hero::new("Sierra".to_string(), crimson.id.clone());
        let kojo = Hero::new("Kojo".to_string(), azure.id.clone());

        let season = Season::new(
            "Winter 2026".to_string(),
            chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        );

        let tournament = Match::new(
            MatchType::Tournament,
            MatchFormat::Bo3,
            MatchStatus::Win,
            season.id.clone(),
            "Rival".to_string(),
        );
        let friendly = Match::new(
            MatchType::Friendly,
            MatchFormat::Bo1,
            MatchStatus::Loss,
            season.id.clone(),
            "Rival".to_string(),
        );

        let games = vec![
            Game::new(
                tournament.id.clone(),
                sierra.id.clone(),
                kojo.id.clone(),
                GameStatus::Win,
            ),
            Game::new(
                tournament.id.clone(),
                sierra.id.clone(),
                kojo.id.clone(),
                GameStatus::Win,
            ),
            Game::new(
                friendly.id.clone(),
                sierra.id.clone(),
                kojo.id.clone(),
                GameStatus::Loss,
            ),
        ];

        JsonlWriter::for_table(&storage, Table::Faction)
            .write_all(&[crimson, azure])
            .unwrap();
        JsonlWriter::for_table(&storage, Table::Hero)
            .write_all(&[sierra, kojo])
            .unwrap();
        JsonlWriter::for_table(&storage, Table::Season)
            .write_all(&[season.clone()])
            .unwrap();
        JsonlWriter::for_table(&storage, Table::Match)
            .write_all(&[tournament, friendly])
            .unwrap();
        JsonlWriter::for_table(&storage, Table::Game)
            .write_all(&games)
            .unwrap();

        Seeded {
            state: AppState {
                storage: Arc::new(storage),
            },
            season,
        }
    }

    #[tokio::test]
    async fn test_faction_stats_endpoint() {
        let tmp = tempfile::tempdir().unwrap();
        let seeded = seed_state(tmp.path());
        let app = build_router(seeded.state);

        let (status, json) = get_json(app, "/api/stats/factions").await;

        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["factionName"], "Crimson Order");
        assert_eq!(rows[0]["totalGames"], 3);
        assert_eq!(rows[0]["winRate"], 66.67);
        assert_eq!(rows[0]["tournamentGames"], 2);
        assert_eq!(rows[0]["friendlyGames"], 1);
    }

    #[tokio::test]
    async fn test_win_rates_endpoint_with_type_filter() {
        let tmp = tempfile::tempdir().unwrap();
        let seeded = seed_state(tmp.path());
        let app = build_router(seeded.state);

        let (status, json) = get_json(app, "/api/stats/win-rates?matchType=TOURNAMENT").await;

        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["heroName"], "Sierra");
        assert_eq!(rows[0]["totalGames"], 2);
        assert_eq!(rows[0]["winRate"], 100.0);
    }

    #[tokio::test]
    async fn test_matchups_endpoint() {
        let tmp = tempfile::tempdir().unwrap();
        let seeded = seed_state(tmp.path());
        let app = build_router(seeded.state);

        let (status, json) = get_json(app, "/api/stats/matchups").await;

        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["heroName"], "Sierra");
        let best = rows[0]["bestMatchups"].as_array().unwrap();
        assert_eq!(best[0]["opponentHeroName"], "Kojo");
        assert_eq!(best[0]["gamesPlayed"], 3);
        assert_eq!(best[0]["winRate"], 66.67);
    }

    #[tokio::test]
    async fn test_match_types_endpoint() {
        let tmp = tempfile::tempdir().unwrap();
        let seeded = seed_state(tmp.path());
        let app = build_router(seeded.state);

        let (status, json) = get_json(app, "/api/stats/match-types").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tournament"]["totalMatches"], 1);
        assert_eq!(json["tournament"]["mostPlayedFormat"], "BO3");
        assert_eq!(json["friendly"]["formatBreakdown"]["BO1"], 1);
        assert_eq!(json["total"]["matches"], 2);
        assert_eq!(json["total"]["uniqueFormatsCount"], 2);
    }

    #[tokio::test]
    async fn test_match_types_endpoint_empty_store() {
        let tmp = tempfile::tempdir().unwrap();
        let state = AppState {
            storage: Arc::new(StorageConfig::new(tmp.path().to_path_buf())),
        };
        let app = build_router(state);

        let (status, json) = get_json(app, "/api/stats/match-types").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tournament"]["totalMatches"], 0);
        assert_eq!(json["tournament"]["mostPlayedFormat"], "BO1");
        assert_eq!(json["tournament"]["averageGamesPerMatch"], 0.0);
        assert!(json["tournament"]["formatBreakdown"]
            .as_object()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_season_filter_via_query() {
        let tmp = tempfile::tempdir().unwrap();
        let seeded = seed_state(tmp.path());
        let app = build_router(seeded.state);

        let uri = format!("/api/stats/factions?seasonId={}", seeded.season.id);
        let (status, json) = get_json(app, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_filter_is_bad_request() {
        let tmp = tempfile::tempdir().unwrap();
        let seeded = seed_state(tmp.path());
        let app = build_router(seeded.state);

        let (status, json) = get_json(app, "/api/stats/factions?limit=0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_invalid_date_is_bad_request() {
        let tmp = tempfile::tempdir().unwrap();
        let seeded = seed_state(tmp.path());
        let app = build_router(seeded.state);

        let (status, json) = get_json(app, "/api/stats/win-rates?startDate=not-a-date").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_overview_endpoint() {
        let tmp = tempfile::tempdir().unwrap();
        let seeded = seed_state(tmp.path());
        let app = build_router(seeded.state);

        let (status, json) = get_json(app, "/api/stats/overview").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["factions"].is_array());
        assert!(json["winRates"].is_array());
        assert!(json["matchups"].is_array());
        assert_eq!(json["matchTypes"]["total"]["matches"], 2);
    }

    #[tokio::test]
    async fn test_overview_empty_store_returns_sections() {
        let tmp = tempfile::tempdir().unwrap();
        let state = AppState {
            storage: Arc::new(StorageConfig::new(tmp.path().to_path_buf())),
        };
        let app = build_router(state);

        let (status, json) = get_json(app, "/api/stats/overview").await;

        // Empty data is not a failure: sections are present, just empty.
        assert_eq!(status, StatusCode::OK);
        assert!(json["factions"].as_array().unwrap().is_empty());
        assert_eq!(json["matchTypes"]["total"]["matches"], 0);
    }
}
