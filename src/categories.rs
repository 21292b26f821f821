//! The planetary symbolism category table and sentence classifier.
//!
//! Twenty fixed thematic categories, each triggered by a small set of
//! lowercase keywords. A sentence belongs to a category when any of its
//! keywords occurs as a plain substring of the lowercased sentence.
//!
//! Matching is intentionally not word-boundary-aware: "war" matches inside
//! "warranty". That imprecision is part of the established output contract
//! and must not be tightened.

/// The compiled-in category table: name paired with its trigger keywords.
const SYMBOLIC_CATEGORIES: &[(&str, &[&str])] = &[
    ("commerce", &["commerce", "trade", "business", "economy"]),
    ("communication", &["communication", "media", "news", "speech"]),
    ("war", &["war", "conflict", "battle", "military"]),
    ("travel", &["travel", "exploration", "migration", "transportation"]),
    ("conflict", &["conflict", "dispute", "tension", "hostility"]),
    ("action", &["action", "movement", "activity", "initiative"]),
    ("law", &["law", "legal", "court", "justice"]),
    ("philosophy", &["philosophy", "thought", "belief", "ideology"]),
    ("expansion", &["expansion", "growth", "development", "increase"]),
    ("structure", &["structure", "organization", "institution", "framework"]),
    ("discipline", &["discipline", "control", "regulation", "order"]),
    ("government", &["government", "state", "policy", "administration"]),
    ("innovation", &["innovation", "invention", "technology", "discovery"]),
    ("revolution", &["revolution", "uprising", "rebellion", "change"]),
    ("spirituality", &["spirituality", "religion", "faith", "belief"]),
    ("dreams", &["dreams", "visions", "aspirations", "imagination"]),
    ("illusion", &["illusion", "deception", "delusion", "mirage"]),
    ("transformation", &["transformation", "change", "shift", "metamorphosis"]),
    ("power", &["power", "authority", "control", "dominance"]),
    ("rebirth", &["rebirth", "renewal", "revival", "resurrection"]),
];

/// A single category: a name and the lowercase keywords that trigger it.
#[derive(Debug, Clone)]
pub struct Category {
    /// The category label used as a key in the output.
    pub name: String,
    /// Lowercase substrings whose presence in a sentence triggers a match.
    pub keywords: Vec<String>,
}

/// An immutable category→keywords table.
///
/// Constructed once at startup and passed by reference to classification
/// calls; it is read-only and safe to share. Keywords are assumed to already
/// be lowercase.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: Vec<Category>,
}

impl CategoryTable {
    /// Build a table from explicit entries.
    pub fn new(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    /// The built-in planetary symbolism table.
    pub fn symbolic() -> Self {
        let entries = SYMBOLIC_CATEGORIES
            .iter()
            .map(|(name, keywords)| Category {
                name: (*name).to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();
        Self::new(entries)
    }

    /// Number of categories in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no categories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classify one sentence against the table.
    ///
    /// The sentence is lowercased before matching. Returns the names of all
    /// matching categories in table order; a sentence may match zero, one,
    /// or several categories.
    pub fn classify(&self, sentence: &str) -> Vec<&str> {
        let folded = sentence.to_lowercase();
        self.entries
            .iter()
            .filter(|category| {
                category
                    .keywords
                    .iter()
                    .any(|keyword| folded.contains(keyword.as_str()))
            })
            .map(|category| category.name.as_str())
            .collect()
    }
}
