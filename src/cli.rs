//! Command-line interface definitions for symbolic_history.
//!
//! All options are optional overrides: running with no arguments fetches the
//! last 100 full years and writes `cleaned_historical_events_100_years.json`
//! in the current directory.

use chrono::{Datelike, Local};
use clap::Parser;

/// Default output filename, kept identical to the established format.
pub const DEFAULT_OUTPUT: &str = "cleaned_historical_events_100_years.json";

/// Command-line arguments for the symbolic_history application.
///
/// # Examples
///
/// ```sh
/// # Default run: current year − 100 through current year − 1
/// symbolic_history
///
/// # A narrower range, custom output path
/// symbolic_history --start-year 1930 --end-year 1940 -o ./out/decade.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// First year to fetch (defaults to 100 years before the current year)
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Year to stop before, exclusive (defaults to the current year)
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Path of the JSON file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,
}

impl Cli {
    /// Resolve the half-open year range `[start, end)` to collect.
    pub fn year_range(&self) -> (i32, i32) {
        let current_year = Local::now().year();
        let start = self.start_year.unwrap_or(current_year - 100);
        let end = self.end_year.unwrap_or(current_year);
        (start, end)
    }
}
