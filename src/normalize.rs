//! Textual-artifact cleanup for Wikipedia extract text.
//!
//! The extract endpoint occasionally hands back text carrying literal escape
//! sequences and section-header markers rather than the decoded characters.
//! This module strips those artifacts with fixed literal-for-literal
//! replacements and collapses the leftover whitespace.
//!
//! This is *not* unicode normalization: the replacement table was
//! reverse-engineered from one source format and is applied verbatim. In
//! particular the escaped en-dash sequence maps to the `â€“` byte sequence
//! that consumers of the output already expect.

/// Clean one string of known extract artifacts.
///
/// Applied substitutions, in order:
/// - literal `–` escape sequences become `â€“`
/// - literal `\n` escape sequences become a single space
/// - `==` section-header markers are removed
/// - literal `\u00` escape prefixes are removed
///
/// Whitespace runs (including any introduced by the substitutions) collapse
/// to single spaces and the result is trimmed. Empty in, empty out; the
/// function is pure and idempotent on artifact-free input.
pub fn normalize(raw: &str) -> String {
    let cleaned = raw
        .replace("\\u2013", "â€“")
        .replace("\\n", " ")
        .replace("==", "")
        .replace("\\u00", "");

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
