// src/pipeline/load.rs

//! Dataset loading entry points.

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{Config, MatchMode};
use crate::services::{ChunkLoader, Lookup};
use crate::source::{ChunkSource, HttpSource, LocalSource};
use crate::utils::http;

/// Pick the chunk source: a local directory when given, the configured
/// base URL otherwise.
pub fn build_source(config: &Config, data_dir: Option<&Path>) -> Result<Arc<dyn ChunkSource>> {
    match data_dir {
        Some(dir) => Ok(Arc::new(LocalSource::new(dir))),
        None => {
            let client = http::create_client(&config.http)?;
            Ok(Arc::new(HttpSource::new(client, &config.source.base_url)?))
        }
    }
}

/// Load the dataset into a fresh lookup context.
///
/// On failure the configured failure message is logged and the error is
/// returned; no context is handed out, so nothing can be queried.
pub async fn run_load(
    config: &Config,
    source: Arc<dyn ChunkSource>,
    mode: MatchMode,
) -> Result<Lookup> {
    let loader = ChunkLoader::new(source, config.source.chunk_count)
        .with_max_concurrent(config.http.max_concurrent);

    let mut lookup = Lookup::new(mode, config.messages.load_failed.clone());
    if let Err(e) = lookup.initialize(&loader).await {
        log::error!("{}", config.messages.load_failed);
        return Err(e);
    }

    Ok(lookup)
}
