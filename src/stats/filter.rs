//! Filter model for aggregate queries.
//!
//! All aggregations accept the same optional filter set (season, match
//! type, inclusive date range, result limit). Raw request parameters are
//! validated into a [`StatsFilter`] before any store access; validation
//! failures are a distinct error from store failures. Unset fields mean
//! "no restriction" and predicates compose with logical AND.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Match, MatchType, SeasonId};

/// Smallest accepted result limit.
pub const MIN_LIMIT: u32 = 1;

/// Largest accepted result limit.
pub const MAX_LIMIT: u32 = 50;

/// Limit applied when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Filter validation errors.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid match type '{0}' (expected TOURNAMENT, FRIENDLY or ALL)")]
    InvalidMatchType(String),

    #[error("Limit {0} out of range ({MIN_LIMIT}-{MAX_LIMIT})")]
    LimitOutOfRange(u32),
}

/// Match-type dimension of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchTypeFilter {
    Tournament,
    Friendly,
    #[default]
    All,
}

impl MatchTypeFilter {
    /// Parse the wire value, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, FilterError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOURNAMENT" => Ok(MatchTypeFilter::Tournament),
            "FRIENDLY" => Ok(MatchTypeFilter::Friendly),
            "ALL" | "" => Ok(MatchTypeFilter::All),
            _ => Err(FilterError::InvalidMatchType(s.to_string())),
        }
    }

    /// Whether a match of the given type passes this dimension.
    pub fn accepts(&self, match_type: MatchType) -> bool {
        match self {
            MatchTypeFilter::Tournament => match_type == MatchType::Tournament,
            MatchTypeFilter::Friendly => match_type == MatchType::Friendly,
            MatchTypeFilter::All => true,
        }
    }
}

/// Raw filter parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsFilterParams {
    pub season_id: Option<String>,
    pub match_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<u32>,
}

/// A validated, normalized filter.
#[derive(Debug, Clone)]
pub struct StatsFilter {
    pub season_id: Option<SeasonId>,
    pub match_type: MatchTypeFilter,
    /// Inclusive lower bound on the calendar date of Match.created_at.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the calendar date of Match.created_at.
    pub end_date: Option<NaiveDate>,
    pub limit: u32,
}

impl Default for StatsFilter {
    fn default() -> Self {
        Self {
            season_id: None,
            match_type: MatchTypeFilter::All,
            start_date: None,
            end_date: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FilterError::InvalidDate(s.to_string()))
}

impl StatsFilter {
    /// Validate raw parameters into a filter.
    ///
    /// A reversed date range is not rejected; it simply matches nothing.
    pub fn from_params(params: &StatsFilterParams) -> Result<Self, FilterError> {
        let match_type = match params.match_type.as_deref() {
            Some(s) => MatchTypeFilter::parse(s)?,
            None => MatchTypeFilter::All,
        };

        let start_date = params.start_date.as_deref().map(parse_date).transpose()?;
        let end_date = params.end_date.as_deref().map(parse_date).transpose()?;

        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(FilterError::LimitOutOfRange(limit));
        }

        Ok(Self {
            season_id: params
                .season_id
                .as_deref()
                .map(|s| SeasonId::from(s.trim())),
            match_type,
            start_date,
            end_date,
            limit,
        })
    }

    /// Builder method to restrict by match type.
    pub fn with_match_type(mut self, match_type: MatchTypeFilter) -> Self {
        self.match_type = match_type;
        self
    }

    /// Builder method to restrict by season.
    pub fn with_season(mut self, season_id: SeasonId) -> Self {
        self.season_id = Some(season_id);
        self
    }

    /// Whether a match passes every filter dimension.
    ///
    /// Also enforces the completed-status invariant: IN_PROGRESS matches
    /// never qualify for any statistic.
    pub fn qualifies(&self, m: &Match) -> bool {
        if !m.match_status.is_completed() {
            return false;
        }
        if !self.match_type.accepts(m.match_type) {
            return false;
        }
        if let Some(ref season_id) = self.season_id {
            if &m.season_id != season_id {
                return false;
            }
        }
        let date = m.created_at.date_naive();
        if let Some(start) = self.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if date > end {
                return false;
            }
        }
        true
    }
}
