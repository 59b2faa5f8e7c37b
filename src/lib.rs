//! # Matchbook
//!
//! A trading-card-game match tracker built around a statistics
//! aggregation core.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (factions, heroes, seasons,
//!   matches, games) and the aggregate response shapes
//! - **stats**: The aggregation core: filter model, raw grouped counts,
//!   ratio/ranking, matchup engine, match-type breakdown
//! - **storage**: JSONL table store backing the relational schema
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod models;
pub mod stats;
pub mod storage;

pub use models::*;
