// src/models/mod.rs

//! Domain models for the lookup application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod dataset;
mod record;

// Re-export all public types
pub use config::{
    Config, DisplayConfig, HttpConfig, MatchMode, Messages, SearchConfig, SourceConfig,
};
pub use dataset::Dataset;
pub use record::{Period, Record, SearchKeys};

/// Statistics about a completed dataset load.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub chunk_count: usize,
    pub record_count: usize,
}

impl LoadStats {
    /// Wall-clock duration of the load in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        (self.end_time - self.start_time).num_milliseconds()
    }
}
