//! Local filesystem chunk source.
//!
//! Reads the same `chunk_NNN.json` layout the CDN serves, for offline use
//! and tests.

use std::path::PathBuf;

use async_trait::async_trait;

use super::{ChunkSource, chunk_file_name, parse_chunk};
use crate::error::{AppError, Result};
use crate::models::Record;

/// Reads chunks from a directory.
#[derive(Debug, Clone)]
pub struct LocalSource {
    root_dir: PathBuf,
}

impl LocalSource {
    /// Create a new LocalSource rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path of the chunk at `index`.
    fn path(&self, index: usize) -> PathBuf {
        self.root_dir.join(chunk_file_name(index))
    }
}

#[async_trait]
impl ChunkSource for LocalSource {
    async fn fetch_chunk(&self, index: usize) -> Result<Vec<Record>> {
        let path = self.path(index);
        log::debug!("Reading {}", path.display());

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| AppError::chunk(index, format!("{}: {e}", path.display())))?;
        parse_chunk(index, &bytes)
    }

    fn location(&self) -> String {
        self.root_dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CHUNK: &str = r#"[
        {"name": "李明", "base_id": 1, "full_id": "0001", "pinyin": "li ming",
         "pinyin_initials": "lm", "school": "北京大学", "year": 2021, "period": 1},
        {"name": "王芳", "base_id": 2, "full_id": "0002", "pinyin": "wang fang",
         "pinyin_initials": "wf", "period": "二"}
    ]"#;

    #[tokio::test]
    async fn test_read_chunk() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("chunk_000.json"), CHUNK).unwrap();

        let source = LocalSource::new(tmp.path());
        let records = source.fetch_chunk(0).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "李明");
        assert_eq!(records[1].school, None);
    }

    #[tokio::test]
    async fn test_missing_chunk_is_error() {
        let tmp = TempDir::new().unwrap();
        let source = LocalSource::new(tmp.path());

        let err = source.fetch_chunk(3).await.unwrap_err();
        assert!(matches!(err, AppError::Chunk { index: 3, .. }));
    }

    #[tokio::test]
    async fn test_malformed_chunk_is_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("chunk_001.json"), "[{\"name\": 5}]").unwrap();

        let source = LocalSource::new(tmp.path());
        assert!(source.fetch_chunk(1).await.is_err());
    }
}
