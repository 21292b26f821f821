//! Output generation for the categorized archive.
//!
//! One submodule today:
//!
//! - [`json`]: writes the whole [`crate::models::YearlyArchive`] to a single
//!   pretty-printed JSON file at the end of the run.

pub mod json;
