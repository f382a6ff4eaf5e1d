// src/pipeline/search.rs

//! One-shot and interactive query entry points.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::Result;
use crate::models::Config;
use crate::services::Lookup;
use crate::utils::Debouncer;

use super::render::render_outcome;

/// Run a single query and print the results.
pub fn run_search(lookup: &Lookup, config: &Config, query: &str, json: bool) -> Result<()> {
    let outcome = lookup.search(query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", render_outcome(&outcome, config));
    }

    Ok(())
}

/// Read queries from stdin, one per line, and print results for the
/// latest line once input has been quiet for `search.debounce_ms`.
///
/// Stops at end of input, after the last pending query has run.
pub async fn run_interactive(lookup: Arc<Lookup>, config: Arc<Config>) -> Result<()> {
    let mut debouncer = Debouncer::new(Duration::from_millis(config.search.debounce_ms));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    log::info!(
        "Interactive search ({} mode), one query per line, Ctrl-D to quit",
        lookup.mode()
    );

    while let Some(line) = lines.next_line().await? {
        let lookup = Arc::clone(&lookup);
        let config = Arc::clone(&config);
        debouncer.call(async move {
            match lookup.search(&line) {
                Ok(outcome) => println!("{}", render_outcome(&outcome, &config)),
                Err(e) => log::error!("{}", e),
            }
        });
    }

    debouncer.flush().await;
    Ok(())
}
