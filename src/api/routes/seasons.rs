use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Match, Season};
use crate::storage::{JsonlReader, Table};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub match_count: u32,
}

#[derive(Debug, Serialize)]
pub struct SeasonsResponse {
    pub seasons: Vec<SeasonSummary>,
}

/// GET /api/seasons
///
/// Read-only listing so a filter UI can populate its season selector.
pub async fn list_seasons(
    State(state): State<AppState>,
) -> Result<Json<SeasonsResponse>, ApiError> {
    let seasons: Vec<Season> = JsonlReader::for_table(&state.storage, Table::Season)
        .read_all()
        .map_err(crate::stats::StatsError::from)?;
    let matches: Vec<Match> = JsonlReader::for_table(&state.storage, Table::Match)
        .read_all()
        .map_err(crate::stats::StatsError::from)?;

    let mut summaries: Vec<SeasonSummary> = seasons
        .into_iter()
        .map(|season| {
            let match_count = matches
                .iter()
                .filter(|m| m.season_id == season.id)
                .count() as u32;
            SeasonSummary {
                id: season.id.to_string(),
                name: season.name,
                start_date: season.start_date.to_string(),
                end_date: season.end_date.to_string(),
                match_count,
            }
        })
        .collect();

    summaries.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));

    Ok(Json(SeasonsResponse { seasons: summaries }))
}
