//! Chunk sources for the awardee dataset.
//!
//! The dataset is split into fixed-named JSON chunks:
//!
//! ```text
//! {base}/
//! ├── chunk_000.json        # JSON array of records
//! ├── chunk_001.json
//! └── chunk_009.json
//! ```
//!
//! `HttpSource` fetches them from a CDN base URL, `LocalSource` reads the
//! same layout from a directory on disk.

pub mod http;
pub mod local;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::Record;

// Re-export for convenience
pub use http::HttpSource;
pub use local::LocalSource;

/// File name of the chunk at `index`, zero-padded to three digits.
pub fn chunk_file_name(index: usize) -> String {
    format!("chunk_{index:03}.json")
}

/// Decode a chunk body into records, tagging failures with the chunk index.
pub fn parse_chunk(index: usize, bytes: &[u8]) -> Result<Vec<Record>> {
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::chunk(index, format!("invalid JSON: {e}")))
}

/// Trait for chunk retrieval backends.
#[async_trait]
pub trait ChunkSource: Send + Sync {
    /// Fetch and decode the chunk at `index`.
    async fn fetch_chunk(&self, index: usize) -> Result<Vec<Record>>;

    /// Human-readable location of the chunks, used in logs.
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_file_name() {
        assert_eq!(chunk_file_name(0), "chunk_000.json");
        assert_eq!(chunk_file_name(9), "chunk_009.json");
        assert_eq!(chunk_file_name(123), "chunk_123.json");
    }

    #[test]
    fn test_parse_chunk_reports_index() {
        let err = parse_chunk(4, b"{not json").unwrap_err();
        assert!(matches!(err, AppError::Chunk { index: 4, .. }));
    }

    #[test]
    fn test_parse_chunk_rejects_non_array() {
        assert!(parse_chunk(0, br#"{"name": "x"}"#).is_err());
    }

    #[test]
    fn test_parse_chunk_empty_array() {
        assert!(parse_chunk(0, b"[]").unwrap().is_empty());
    }
}
