//! Filesystem store operations.
//!
//! The relational store is materialized as one JSONL file per table
//! under `<data_dir>/tables/`. The statistics core only reads from it;
//! writes come from the (out of scope) CRUD layer and from fixtures.

use std::path::PathBuf;
use thiserror::Error;

mod jsonl;

pub use jsonl::{JsonlReader, JsonlWriter, Table};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.data_dir.join("tables")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
