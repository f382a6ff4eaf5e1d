// src/services/loader.rs

//! Dataset loader service.
//!
//! Fetches every chunk concurrently and concatenates them in chunk-index
//! order. The load is all-or-nothing: the first failing chunk fails the
//! whole load and no partial dataset is returned.

use std::sync::Arc;

use chrono::Utc;
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::error::{AppError, Result};
use crate::models::{Dataset, LoadStats, Record};
use crate::source::ChunkSource;

/// Service for loading the chunked dataset from a [`ChunkSource`].
pub struct ChunkLoader {
    source: Arc<dyn ChunkSource>,
    chunk_count: usize,
    max_concurrent: usize,
}

impl ChunkLoader {
    /// Create a loader for chunks `0..chunk_count`.
    pub fn new(source: Arc<dyn ChunkSource>, chunk_count: usize) -> Self {
        Self {
            source,
            chunk_count,
            max_concurrent: chunk_count.max(1),
        }
    }

    /// Bound the number of chunk fetches in flight.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Fetch all chunks and build the dataset.
    pub async fn load(&self) -> Result<(Dataset, LoadStats)> {
        let start_time = Utc::now();
        log::info!(
            "Loading {} chunks from {}",
            self.chunk_count,
            self.source.location()
        );

        // `buffered` yields in submission order, so chunks stay in index order.
        let chunks: Vec<Vec<Record>> = stream::iter(0..self.chunk_count)
            .map(|index| async move {
                let records = self.source.fetch_chunk(index).await?;
                log::debug!("Chunk {:03}: {} records", index, records.len());
                Ok::<_, AppError>(records)
            })
            .buffered(self.max_concurrent)
            .try_collect()
            .await
            .inspect_err(|e| log::error!("Dataset load failed: {}", e))?;

        let dataset = Dataset::from_chunks(chunks);
        let stats = LoadStats {
            start_time,
            end_time: Utc::now(),
            chunk_count: self.chunk_count,
            record_count: dataset.len(),
        };

        log::info!(
            "Loaded {} records from {} chunks in {} ms",
            stats.record_count,
            stats.chunk_count,
            stats.elapsed_ms()
        );

        Ok((dataset, stats))
    }
}
