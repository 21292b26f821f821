//! Year-range collection: fetch, categorize, accumulate.
//!
//! The collector walks a half-open year range in ascending order, obtains
//! each year's raw summary text through the [`FetchYear`] seam, runs it
//! through categorization, and files the result under that year. Strictly
//! sequential, one year at a time; the first fetch error aborts the run
//! with nothing written.

use crate::categories::CategoryTable;
use crate::categorize::categorize;
use crate::models::YearlyArchive;
use std::error::Error;
use tracing::{debug, info, instrument};

/// Source of raw yearly summary text.
///
/// Implementors return the full text for a year, or a sentinel "no
/// information" string when the year has no usable page — never an empty
/// string on success. Errors are transport-level failures and end the run.
pub trait FetchYear {
    /// Fetch the raw summary text for `year`.
    async fn fetch(&self, year: i32) -> Result<String, Box<dyn Error>>;
}

/// Fetch and categorize every year in `[start_year, end_year)`.
///
/// Years are visited in ascending order. Each year's result is stored even
/// when empty, so the archive always holds one entry per year in the range.
/// No retries: any fetch error propagates immediately.
#[instrument(level = "info", skip(fetcher, table))]
pub async fn collect<F: FetchYear>(
    start_year: i32,
    end_year: i32,
    fetcher: &F,
    table: &CategoryTable,
) -> Result<YearlyArchive, Box<dyn Error>> {
    let mut archive = YearlyArchive::new();

    for year in start_year..end_year {
        info!(year, "Fetching events for the year");
        let text = fetcher.fetch(year).await?;

        let result = categorize(&text, table);
        debug!(year, categories = result.len(), "Categorized yearly summary");
        archive.insert(year, result);
    }

    Ok(archive)
}
