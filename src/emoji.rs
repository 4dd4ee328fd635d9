//! Emoji substitution strategies.
//!
//! Words are the pieces of the input split on single spaces, so runs of spaces
//! and leading or trailing spaces survive the round trip unchanged.

use crate::catalog::EmojiCatalog;
use crate::error::TransformError;
use crate::keyword_index::KeywordIndex;
use regex::NoExpand;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const WORD_SEPARATOR: &str = " ";

/// Which table the emojify transformation consults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiStrategy {
    /// Annotate words found in the keyword index
    Keyword,
    /// Annotate words by first match in the catalog
    #[default]
    Catalog,
    /// Replace keyword occurrences anywhere in the text with the emoji
    Replace,
}

impl EmojiStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            EmojiStrategy::Keyword => "keyword",
            EmojiStrategy::Catalog => "catalog",
            EmojiStrategy::Replace => "replace",
        }
    }
}

impl FromStr for EmojiStrategy {
    type Err = TransformError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "keyword" | "table" => Ok(EmojiStrategy::Keyword),
            "catalog" => Ok(EmojiStrategy::Catalog),
            "replace" => Ok(EmojiStrategy::Replace),
            invalid => Err(TransformError::Config(format!(
                "unknown emoji strategy: {invalid}"
            ))),
        }
    }
}

impl std::fmt::Display for EmojiStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Case handling for catalog keyword matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchCase {
    #[default]
    Sensitive,
    Insensitive,
}

impl FromStr for MatchCase {
    type Err = TransformError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "sensitive" => Ok(MatchCase::Sensitive),
            "insensitive" => Ok(MatchCase::Insensitive),
            invalid => Err(TransformError::Config(format!(
                "unknown match mode: {invalid}"
            ))),
        }
    }
}

/// Append the indexed emoji after every word whose trimmed lowercase form is
/// a keyword. The original word is kept as written.
pub fn emojify_by_keyword(input: &str, index: &KeywordIndex) -> String {
    map_words(input, |word| {
        let key = word.to_lowercase();
        index
            .get(key.trim())
            .map(|emoji| format!("{word} {emoji}"))
    })
}

/// Append the character of the first catalog record listing the word as a
/// keyword. Matching is exact and case-sensitive.
pub fn emojify_by_catalog(input: &str, catalog: &EmojiCatalog) -> String {
    emojify_by_catalog_with(input, catalog, MatchCase::Sensitive)
}

/// `emojify_by_catalog` with an explicit case mode
pub fn emojify_by_catalog_with(input: &str, catalog: &EmojiCatalog, case: MatchCase) -> String {
    map_words(input, |word| {
        let found = match case {
            MatchCase::Sensitive => catalog.find_by_keyword(word),
            MatchCase::Insensitive => catalog.find_by_keyword_ignore_case(word),
        };
        // A word that is already the emoji stays as it is
        found
            .filter(|character| *character != word)
            .map(|character| format!("{word} {character}"))
    })
}

/// Replace every case-insensitive occurrence of each catalog keyword with the
/// record's character, record by record in catalog order.
///
/// Occurrences are not limited to whole words, and an emoji inserted for an
/// earlier keyword can itself be matched by a later one.
pub fn emojify_by_replacement(input: &str, catalog: &EmojiCatalog) -> String {
    let mut text = input.to_string();
    for pattern in catalog.keyword_patterns() {
        if pattern.regex.is_match(&text) {
            text = pattern
                .regex
                .replace_all(&text, NoExpand(&pattern.character))
                .into_owned();
        }
    }
    text
}

fn map_words<F>(input: &str, mut annotate: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    input
        .split(WORD_SEPARATOR)
        .map(|word| annotate(word).unwrap_or_else(|| word.to_string()))
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
}
