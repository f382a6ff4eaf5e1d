// src/services/lookup.rs

//! Lookup context: owns the loaded dataset and gates querying on it.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Dataset, LoadStats, MatchMode, Record};
use crate::services::{ChunkLoader, Matcher};

/// Lifecycle of the dataset.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Not loaded yet
    Loading,
    /// Loaded and queryable
    Ready(Arc<Dataset>),
    /// Load failed; holds the user-facing message
    Failed(String),
}

/// Result of one query.
#[derive(Debug, Serialize)]
pub struct SearchOutcome<'a> {
    /// Total number of loaded records
    pub total: usize,
    /// Number of matching records
    pub matched: usize,
    /// Matching records in load order
    pub records: Vec<&'a Record>,
}

/// Application data context.
///
/// Starts in [`LoadState::Loading`] and is initialized exactly once. Only a
/// ready context answers queries.
#[derive(Debug)]
pub struct Lookup {
    state: LoadState,
    matcher: Matcher,
    failure_message: String,
}

impl Lookup {
    /// Create an unloaded context.
    ///
    /// `failure_message` is what users see if the load fails.
    pub fn new(mode: MatchMode, failure_message: impl Into<String>) -> Self {
        Self {
            state: LoadState::Loading,
            matcher: Matcher::new(mode),
            failure_message: failure_message.into(),
        }
    }

    /// Create a ready context around an already built dataset.
    pub fn from_dataset(dataset: Dataset, mode: MatchMode) -> Self {
        Self {
            state: LoadState::Ready(Arc::new(dataset)),
            matcher: Matcher::new(mode),
            failure_message: String::new(),
        }
    }

    /// Run the loader and move to `Ready` or `Failed`.
    ///
    /// Only valid from `Loading`; there is no retry on the same context.
    pub async fn initialize(&mut self, loader: &ChunkLoader) -> Result<LoadStats> {
        if !matches!(self.state, LoadState::Loading) {
            return Err(AppError::AlreadyInitialized);
        }

        match loader.load().await {
            Ok((dataset, stats)) => {
                self.state = LoadState::Ready(Arc::new(dataset));
                Ok(stats)
            }
            Err(e) => {
                self.state = LoadState::Failed(self.failure_message.clone());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    pub fn mode(&self) -> MatchMode {
        self.matcher.mode()
    }

    /// The loaded dataset, or `NotReady` while loading or after a failure.
    pub fn dataset(&self) -> Result<&Arc<Dataset>> {
        match &self.state {
            LoadState::Ready(dataset) => Ok(dataset),
            LoadState::Loading => Err(AppError::not_ready("still loading")),
            LoadState::Failed(message) => Err(AppError::not_ready(message.clone())),
        }
    }

    /// Filter the dataset with `query`.
    pub fn search(&self, query: &str) -> Result<SearchOutcome<'_>> {
        let dataset = self.dataset()?;
        let records = self.matcher.filter(query, dataset);
        log::debug!(
            "Query {:?} ({}) matched {} of {}",
            query,
            self.matcher.mode(),
            records.len(),
            dataset.len()
        );

        Ok(SearchOutcome {
            total: dataset.len(),
            matched: records.len(),
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::loader::tests::{MemorySource, numbered_chunks, record};

    #[tokio::test]
    async fn test_search_before_initialize_is_not_ready() {
        let lookup = Lookup::new(MatchMode::Strict, "load failed");
        assert!(!lookup.is_ready());
        assert!(matches!(lookup.search("li"), Err(AppError::NotReady(_))));
    }

    #[tokio::test]
    async fn test_initialize_then_search() {
        let mut chunks = numbered_chunks(10, 5);
        chunks[2][1] = record("李明", 2023, "li ming", "lm");
        chunks[2][4] = record("李华", 3001, "li hua", "lh");
        chunks[7][0] = record("李强", 3002, "li qiang", "lq");
        let loader = ChunkLoader::new(Arc::new(MemorySource::new(chunks)), 10);

        let mut lookup = Lookup::new(MatchMode::Strict, "load failed");
        let stats = lookup.initialize(&loader).await.unwrap();
        assert_eq!(stats.record_count, 50);
        assert!(lookup.is_ready());

        let outcome = lookup.search("李").unwrap();
        assert_eq!(outcome.total, 50);
        assert_eq!(outcome.matched, 3);
        let ids: Vec<u64> = outcome.records.iter().map(|r| r.base_id).collect();
        assert_eq!(ids, vec![2023, 3001, 3002]);
    }

    #[tokio::test]
    async fn test_failed_load_blocks_queries() {
        let mut source = MemorySource::new(numbered_chunks(3, 2));
        source.failing.insert(0);
        let loader = ChunkLoader::new(Arc::new(source), 3);

        let mut lookup = Lookup::new(MatchMode::Strict, "数据加载失败，请刷新重试");
        assert!(lookup.initialize(&loader).await.is_err());
        assert!(matches!(lookup.state(), LoadState::Failed(_)));

        match lookup.search("jia") {
            Err(AppError::NotReady(message)) => {
                assert_eq!(message, "数据加载失败，请刷新重试")
            }
            other => panic!("expected NotReady, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_initialize_twice_is_rejected() {
        let loader = ChunkLoader::new(
            Arc::new(MemorySource::new(numbered_chunks(1, 1))),
            1,
        );
        let mut lookup = Lookup::new(MatchMode::Strict, "load failed");
        lookup.initialize(&loader).await.unwrap();

        assert!(matches!(
            lookup.initialize(&loader).await,
            Err(AppError::AlreadyInitialized)
        ));
        assert!(lookup.is_ready());
    }

    #[test]
    fn test_strict_id_query_through_context() {
        let dataset = Dataset::from_chunks(vec![vec![
            record("李明", 2023, "li ming", "lm"),
            record("王芳", 77, "wang fang", "wf"),
        ]]);
        let lookup = Lookup::from_dataset(dataset, MatchMode::Strict);

        let outcome = lookup.search("2023").unwrap();
        assert_eq!(outcome.matched, 1);
        assert_eq!(outcome.records[0].name, "李明");
        assert_eq!(lookup.search("   ").unwrap().matched, 0);
    }
}
