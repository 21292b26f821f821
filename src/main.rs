//! # Symbolic History
//!
//! A pipeline that fetches a century of yearly summary text from Wikipedia,
//! cleans it, tags each sentence with a fixed set of twenty planetary
//! symbolism categories via keyword matching, and writes the result to a
//! single pretty-printed JSON file.
//!
//! ## Usage
//!
//! ```sh
//! symbolic_history
//! symbolic_history --start-year 1930 --end-year 1940 -o decade.json
//! ```
//!
//! ## Architecture
//!
//! The application is a strictly sequential pipeline:
//! 1. **Fetching**: Download each year's plain-text extract from the
//!    MediaWiki API, one year at a time
//! 2. **Segmentation**: Split the extract into ordered sentence spans
//! 3. **Categorization**: Normalize each sentence and file it under every
//!    category whose keywords it contains
//! 4. **Output**: Write the full year → category → sentences archive as JSON
//!
//! There are no retries and no partial output: a fetch failure ends the run
//! before anything is written.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod categories;
mod categorize;
mod cli;
mod collector;
mod models;
mod normalize;
mod outputs;
mod segment;
mod utils;
mod wikipedia;

use categories::CategoryTable;
use cli::Cli;
use collector::collect;
use outputs::json;
use wikipedia::WikipediaClient;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("symbolic_history starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.start_year, ?args.end_year, %args.output, "Parsed CLI arguments");

    let (start_year, end_year) = args.year_range();
    info!(start_year, end_year, "Collecting yearly summaries");

    // The category table is built once and shared read-only for the run.
    let table = CategoryTable::symbolic();
    info!(categories = table.len(), "Loaded symbolism category table");

    let client = WikipediaClient::new();

    // Sequential fetch + categorize; the first fetch error aborts the run.
    let archive = collect(start_year, end_year, &client, &table).await?;
    info!(years = archive.len(), "Collection complete");

    json::write_archive(&archive, &args.output).await?;
    info!(path = %args.output, "Cleaned data saved");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
