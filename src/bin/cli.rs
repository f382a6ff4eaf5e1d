//! Scholarship awardee lookup CLI
//!
//! Loads the chunked dataset once, then answers queries against it.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use scholarship_query::{
    error::Result,
    models::{Config, MatchMode},
    pipeline,
};

/// scholarship-query - Awardee lookup by name, pinyin, initials or id
#[derive(Parser, Debug)]
#[command(
    name = "scholarship-query",
    version,
    about = "Search scholarship awardees by name, pinyin, initials or id"
)]

struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Read chunk_NNN.json files from this directory instead of the CDN
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one query and print the matches
    Search {
        /// Free-text query: Chinese name, pinyin, initials, id or a mix
        query: String,

        /// Matching policy: strict or loose (default: from config)
        #[arg(short, long)]
        mode: Option<MatchMode>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read queries from stdin and print matches for each
    Interactive {
        /// Matching policy: strict or loose (default: from config)
        #[arg(short, long)]
        mode: Option<MatchMode>,
    },

    /// Load the dataset and show record counts
    Info,

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Command::Search { query, mode, json } => {
            let mode = mode.unwrap_or(config.search.mode);
            let source = pipeline::build_source(&config, data_dir)?;
            let lookup = pipeline::run_load(&config, source, mode).await?;
            pipeline::run_search(&lookup, &config, &query, json)?;
        }

        Command::Interactive { mode } => {
            let mode = mode.unwrap_or(config.search.mode);
            let source = pipeline::build_source(&config, data_dir)?;
            let lookup = pipeline::run_load(&config, source, mode).await?;
            pipeline::run_interactive(Arc::new(lookup), Arc::new(config)).await?;
        }

        Command::Info => {
            let source = pipeline::build_source(&config, data_dir)?;
            let lookup = pipeline::run_load(&config, source, config.search.mode).await?;
            let dataset = lookup.dataset()?;

            log::info!("Total records: {}", dataset.len());
            for (index, size) in dataset.chunk_sizes().iter().enumerate() {
                log::info!("  chunk_{:03}.json: {} records", index, size);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK ({} chunks, {} mode)",
                config.source.chunk_count,
                config.search.mode
            );
        }
    }

    Ok(())
}
