//! Per-document event categorization.
//!
//! Walks the sentences of one year's summary text in order, cleans each,
//! and files it under every category whose keywords it contains. Categories
//! that match nothing never appear in the result.

use crate::categories::CategoryTable;
use crate::models::CategorizedResult;
use crate::normalize::normalize;
use crate::segment::sentences;
use crate::utils::upcase;

/// Categorize the sentences of `document` against `table`.
///
/// For each sentence in document order: normalize it, classify the
/// normalized text, and append it (first character capitalized, remaining
/// characters untouched) to every matching category's list. Sentences that
/// normalize to the empty string or match no category are skipped.
///
/// Within each category, sentence order equals document order. Every
/// category present in the result holds at least one sentence.
pub fn categorize(document: &str, table: &CategoryTable) -> CategorizedResult {
    let mut result = CategorizedResult::new();

    for span in sentences(document) {
        let cleaned = normalize(&span.text);
        if cleaned.is_empty() {
            continue;
        }

        for name in table.classify(&cleaned) {
            result
                .entry(name.to_string())
                .or_default()
                .push(upcase(&cleaned));
        }
    }

    result
}
