//! Ordered emoji catalog built from a structured record list.

use crate::error::{Result, TransformError};
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A single emoji entry of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(rename = "char")]
    pub character: String,
    pub category: String,
}

impl EmojiRecord {
    pub fn new(
        name: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
        character: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            character: character.into(),
            category: category.into(),
        }
    }

    /// Exact keyword membership
    pub fn has_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }

    /// Keyword membership ignoring case
    pub fn has_keyword_ignore_case(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.keywords.iter().any(|k| k.to_lowercase() == word)
    }
}

/// Compiled case-insensitive keyword pattern with its replacement
#[derive(Debug)]
pub(crate) struct KeywordPattern {
    pub(crate) regex: Regex,
    pub(crate) character: String,
}

/// Emoji records in input order. Lookups return the first match.
#[derive(Debug, Default)]
pub struct EmojiCatalog {
    records: Vec<EmojiRecord>,
    patterns: OnceCell<Vec<KeywordPattern>>,
}

impl Clone for EmojiCatalog {
    fn clone(&self) -> Self {
        Self::new(self.records.clone())
    }
}

impl PartialEq for EmojiCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl EmojiCatalog {
    /// Wrap already validated records
    pub fn new(records: Vec<EmojiRecord>) -> Self {
        Self {
            records,
            patterns: OnceCell::new(),
        }
    }

    /// Build a catalog from untyped records, validating each one.
    ///
    /// Fails with `MalformedRecord` naming the first record that lacks a
    /// required field or carries a field of the wrong type.
    pub fn from_records(records: &[Value]) -> Result<Self> {
        let parsed = records
            .iter()
            .enumerate()
            .map(|(index, value)| {
                EmojiRecord::deserialize(value)
                    .map_err(|e| TransformError::malformed(index, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(records = parsed.len(), "Built emoji catalog");
        Ok(Self::new(parsed))
    }

    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(records) => Self::from_records(&records),
            other => Err(TransformError::MalformedCatalog(format!(
                "expected an array of records, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Character of the first record whose keywords contain `word` exactly
    pub fn find_by_keyword(&self, word: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.has_keyword(word))
            .map(|r| r.character.as_str())
    }

    /// Like `find_by_keyword`, comparing keywords without regard to case
    pub fn find_by_keyword_ignore_case(&self, word: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.has_keyword_ignore_case(word))
            .map(|r| r.character.as_str())
    }

    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive literal patterns for every non-empty keyword, in
    /// catalog order. Compiled on first use.
    pub(crate) fn keyword_patterns(&self) -> &[KeywordPattern] {
        self.patterns.get_or_init(|| {
            let mut patterns = Vec::new();
            for record in &self.records {
                for keyword in record.keywords.iter().filter(|k| !k.is_empty()) {
                    match RegexBuilder::new(&regex::escape(keyword))
                        .case_insensitive(true)
                        .build()
                    {
                        Ok(regex) => patterns.push(KeywordPattern {
                            regex,
                            character: record.character.clone(),
                        }),
                        Err(e) => warn!(keyword = %keyword, error = %e, "Skipping keyword pattern"),
                    }
                }
            }
            debug!(patterns = patterns.len(), "Compiled keyword patterns");
            patterns
        })
    }
}

impl From<Vec<EmojiRecord>> for EmojiCatalog {
    fn from(records: Vec<EmojiRecord>) -> Self {
        Self::new(records)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> EmojiCatalog {
        EmojiCatalog::new(vec![
            EmojiRecord::new("grinning", ["happy", "glad"], "😀", "people"),
            EmojiRecord::new("smile", ["happy", "Smile"], "😄", "people"),
            EmojiRecord::new("cat", ["cat", "pet"], "🐱", "animals"),
        ])
    }

    #[test]
    fn test_find_first_match_in_order() {
        let catalog = sample();
        assert_eq!(catalog.find_by_keyword("happy"), Some("😀"));
        assert_eq!(catalog.find_by_keyword("pet"), Some("🐱"));
        assert_eq!(catalog.find_by_keyword("xyz"), None);
    }

    #[test]
    fn test_find_is_exact_not_substring() {
        let catalog = sample();
        assert_eq!(catalog.find_by_keyword("hap"), None);
        assert_eq!(catalog.find_by_keyword("cats"), None);
    }

    #[test]
    fn test_find_case_modes() {
        let catalog = sample();
        assert_eq!(catalog.find_by_keyword("smile"), None);
        assert_eq!(catalog.find_by_keyword("Smile"), Some("😄"));
        assert_eq!(catalog.find_by_keyword_ignore_case("SMILE"), Some("😄"));
        assert_eq!(catalog.find_by_keyword_ignore_case("Cat"), Some("🐱"));
    }

    #[test]
    fn test_from_records_preserves_order() {
        let records = vec![
            json!({"name": "b", "keywords": ["x"], "char": "🅱", "category": "symbols"}),
            json!({"name": "a", "keywords": ["x"], "char": "🅰", "category": "symbols"}),
        ];
        let catalog = EmojiCatalog::from_records(&records).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].name, "b");
        assert_eq!(catalog.find_by_keyword("x"), Some("🅱"));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let records = vec![
            json!({"name": "ok", "keywords": [], "char": "✅", "category": "symbols"}),
            json!({"name": "no char", "keywords": ["x"], "category": "symbols"}),
        ];
        match EmojiCatalog::from_records(&records) {
            Err(TransformError::MalformedRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("char"), "reason was {reason}");
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let records = vec![json!({"name": "x", "keywords": "happy", "char": "😀", "category": "p"})];
        assert!(matches!(
            EmojiCatalog::from_records(&records),
            Err(TransformError::MalformedRecord { index: 0, .. })
        ));

        let records = vec![json!("just a string")];
        assert!(matches!(
            EmojiCatalog::from_records(&records),
            Err(TransformError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"name":"fire","keywords":["fire","hot"],"char":"🔥","category":"travel"}]"#;
        let catalog = EmojiCatalog::from_json(json).unwrap();
        assert_eq!(catalog.find_by_keyword("hot"), Some("🔥"));
        assert_eq!(catalog.records()[0].category, "travel");
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(matches!(
            EmojiCatalog::from_json(r#"{"name":"fire"}"#),
            Err(TransformError::MalformedCatalog(_))
        ));
        assert!(matches!(
            EmojiCatalog::from_json("not json"),
            Err(TransformError::Json(_))
        ));
    }

    #[test]
    fn test_keyword_patterns_skip_empty_keywords() {
        let catalog = EmojiCatalog::new(vec![EmojiRecord::new("x", ["", "a.b"], "❌", "s")]);
        let patterns = catalog.keyword_patterns();
        assert_eq!(patterns.len(), 1);
        assert!(patterns[0].regex.is_match("A.B"));
        assert!(!patterns[0].regex.is_match("axb"));
    }
}
