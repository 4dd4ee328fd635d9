//! Flat keyword to emoji lookup built from a two column `emoji,name` table.
//!
//! Construction is tolerant: rows with fewer than two fields are skipped rather
//! than reported. Callers that need strict validation should check rows before
//! handing them to the builder.

use std::collections::HashMap;
use tracing::{debug, trace};

/// Field separator of the delimited table
pub const FIELD_DELIMITER: char = ',';

/// Mapping from lowercase keyword to emoji character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordIndex {
    entries: HashMap<String, String>,
}

impl KeywordIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `(emoji, name, ...)` rows.
    ///
    /// Every space separated token of `name` becomes a lowercase keyword for
    /// `emoji`. When a keyword appears in several rows the last row wins.
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        let mut skipped = 0usize;

        for row in rows {
            let fields = row.as_ref();
            if fields.len() < 2 {
                skipped += 1;
                continue;
            }
            let emoji = fields[0].as_ref().trim();
            let name = fields[1].as_ref().trim();
            index.insert_name(emoji, name);
        }

        debug!(
            keywords = index.len(),
            skipped_rows = skipped,
            "Built keyword index"
        );
        index
    }

    /// Parse delimited table text. The first line is a header and is skipped.
    pub fn parse_table(text: &str) -> Self {
        let rows = text
            .lines()
            .skip(1)
            .map(|line| line.split(FIELD_DELIMITER).collect::<Vec<_>>());
        Self::from_rows(rows)
    }

    /// Index every keyword of `name` for `emoji`
    fn insert_name(&mut self, emoji: &str, name: &str) {
        // Repeated separators produce empty tokens; they never match a word.
        for keyword in name.split(' ').filter(|k| !k.is_empty()) {
            if let Some(previous) = self.insert(keyword, emoji) {
                trace!(keyword, previous = %previous, emoji, "Keyword overwritten");
            }
        }
    }

    /// Insert a keyword (lowercased) with last-write-wins semantics.
    ///
    /// Returns the emoji previously stored for the keyword, if any.
    pub fn insert(&mut self, keyword: &str, emoji: &str) -> Option<String> {
        self.entries
            .insert(keyword.to_lowercase(), emoji.to_string())
    }

    /// Look up a keyword. The key must already be lowercase.
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries.get(keyword).map(String::as_str)
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no keywords
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(keyword, emoji)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeywordIndex {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (keyword, emoji) in iter {
            index.insert(&keyword.into(), &emoji.into());
        }
        index
    }
}
