//! Heuristic sentence segmentation for Wikipedia extract text.
//!
//! A single forward scan over the document yields [`SentenceSpan`]s in
//! document order. Boundaries are `.`, `!`, or `?` followed by optional
//! closing quotes/brackets and then whitespace; periods after initials,
//! dotted abbreviations (U.S.A.), and common title abbreviations are not
//! treated as boundaries. Bare newlines also end a span, since extract text
//! carries section-heading lines without terminal punctuation.
//!
//! The iterator is lazy and finite; calling [`sentences`] again restarts
//! from the top of the document. Spans carry byte offsets into the source
//! so callers can map a sentence back to its position.

use once_cell::sync::Lazy;
use regex::Regex;

/// One sentence of a document: the trimmed text plus the byte range it
/// occupies in the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan {
    /// The sentence text, trimmed of surrounding whitespace.
    pub text: String,
    /// Byte offset of the first character of `text` in the source.
    pub start: usize,
    /// Byte offset one past the last character of `text` in the source.
    pub end: usize,
}

// Single capital letter followed by a period (J. K. Rowling).
static INITIAL_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\s)[A-Z]\.$").unwrap());

// Dotted abbreviations: U.S.A., e.g., a.m.
static ABBREV_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]\.[A-Za-z]\.$").unwrap());

// Titles and common short abbreviations.
static TITLE_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[\s(\[])(?:mr|mrs|ms|dr|prof|rev|gen|col|lt|capt|st|no|nos|vs|etc|al|jr|sr|ca|cf|approx|fig|vol|pp)\.$")
        .unwrap()
});

/// True if `prefix` (which ends with a period) ends in an abbreviation whose
/// period should not close a sentence.
fn ends_with_abbreviation(prefix: &str) -> bool {
    INITIAL_TAIL.is_match(prefix) || ABBREV_TAIL.is_match(prefix) || TITLE_TAIL.is_match(prefix)
}

/// Segment `text` into sentences.
///
/// Returns a lazy iterator of [`SentenceSpan`]s in document order. Empty
/// input yields no spans; blank lines are skipped.
///
/// # Example
///
/// ```ignore
/// let spans: Vec<_> = sentences("Dr. Smith arrived. He left.").collect();
/// assert_eq!(spans.len(), 2);
/// ```
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { text, pos: 0 }
}

/// Iterator over the sentence spans of one document. See [`sentences`].
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = SentenceSpan;

    fn next(&mut self) -> Option<SentenceSpan> {
        while self.pos < self.text.len() {
            let start = self.pos;
            let mut span_end = self.text.len();
            let mut resume = self.text.len();
            let mut iter = self.text[start..].char_indices().peekable();

            'scan: while let Some((off, c)) = iter.next() {
                let i = start + off;
                match c {
                    '\n' => {
                        span_end = i;
                        resume = i + 1;
                        break 'scan;
                    }
                    '.' | '!' | '?' => {
                        let mut end = i + c.len_utf8();
                        // Absorb closing quotes and brackets after the ender.
                        while let Some(&(noff, nc)) = iter.peek() {
                            if matches!(nc, '"' | '\'' | ')' | ']' | '\u{2019}' | '\u{201d}') {
                                end = start + noff + nc.len_utf8();
                                iter.next();
                            } else {
                                break;
                            }
                        }
                        // Boundaries require whitespace (or end of input)
                        // after the ender, which keeps 3.14 and
                        // example.org intact.
                        let followed_by_space = self.text[end..]
                            .chars()
                            .next()
                            .is_none_or(|nc| nc.is_whitespace());
                        if !followed_by_space {
                            continue;
                        }
                        if c == '.'
                            && end == i + 1
                            && ends_with_abbreviation(&self.text[start..end])
                        {
                            continue;
                        }
                        span_end = end;
                        resume = end;
                        break 'scan;
                    }
                    _ => {}
                }
            }

            self.pos = resume;
            if let Some(span) = trimmed_span(self.text, start, span_end) {
                return Some(span);
            }
        }
        None
    }
}

/// Trim a raw span down to its non-whitespace extent, keeping offsets exact.
fn trimmed_span(text: &str, start: usize, end: usize) -> Option<SentenceSpan> {
    let raw = &text[start..end];
    let left = raw.trim_start();
    let span_start = start + (raw.len() - left.len());
    let trimmed = left.trim_end();
    if trimmed.is_empty() {
        return None;
    }
    Some(SentenceSpan {
        text: trimmed.to_string(),
        start: span_start,
        end: span_start + trimmed.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(doc: &str) -> Vec<String> {
        sentences(doc).map(|s| s.text).collect()
    }

    #[test]
    fn test_basic_sentences() {
        let got = texts("Hello world. This is a test.");
        assert_eq!(got, vec!["Hello world.", "This is a test."]);
    }

    #[test]
    fn test_question_and_exclamation() {
        let got = texts("Is this working? Yes it is! Great.");
        assert_eq!(got, vec!["Is this working?", "Yes it is!", "Great."]);
    }

    #[test]
    fn test_titles_do_not_split() {
        let got = texts("Dr. Smith went to Washington. He arrived late.");
        assert_eq!(got, vec!["Dr. Smith went to Washington.", "He arrived late."]);
    }

    #[test]
    fn test_initials_do_not_split() {
        let got = texts("J. K. Rowling wrote it. It sold well.");
        assert_eq!(got, vec!["J. K. Rowling wrote it.", "It sold well."]);
    }

    #[test]
    fn test_dotted_abbreviations_do_not_split() {
        let got = texts("People in the U.S.A. love freedom. Really.");
        assert_eq!(got, vec!["People in the U.S.A. love freedom.", "Really."]);
    }

    #[test]
    fn test_floating_point_intact() {
        let got = texts("The value was 3.14159. Then it changed.");
        assert_eq!(got, vec!["The value was 3.14159.", "Then it changed."]);
    }

    #[test]
    fn test_newline_acts_as_boundary() {
        let got = texts("1925\nEvents of the year. More text follows.");
        assert_eq!(
            got,
            vec!["1925", "Events of the year.", "More text follows."]
        );
    }

    #[test]
    fn test_quoted_ending() {
        let got = texts(r#"He said "Stop." Then he left."#);
        assert_eq!(got, vec![r#"He said "Stop.""#, "Then he left."]);
    }

    #[test]
    fn test_offsets_match_source() {
        let doc = "  First sentence.  Second one!  ";
        for span in sentences(doc) {
            assert_eq!(&doc[span.start..span.end], span.text);
        }
    }

    #[test]
    fn test_restartable() {
        let doc = "One. Two. Three.";
        let first: Vec<_> = sentences(doc).collect();
        let second: Vec<_> = sentences(doc).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sentences("").count(), 0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let got = texts("First.\n\n\nSecond.");
        assert_eq!(got, vec!["First.", "Second."]);
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let got = texts("No ending punctuation here");
        assert_eq!(got, vec!["No ending punctuation here"]);
    }
}
