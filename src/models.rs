//! Output data model for categorized yearly events.
//!
//! Both structures are plain ordered maps so the serialized JSON is
//! deterministic run to run. serde_json writes the integer year keys as JSON
//! strings and reads them back as integers, so an archive round-trips
//! through the output format unchanged.

use std::collections::BTreeMap;

/// Per-document categorization output: category name → matched sentences in
/// document order. Only categories with at least one match are present;
/// empty lists never appear.
pub type CategorizedResult = BTreeMap<String, Vec<String>>;

/// The full multi-year output: year → [`CategorizedResult`]. Consumers index
/// by year, so key iteration order carries no meaning.
pub type YearlyArchive = BTreeMap<i32, CategorizedResult>;
