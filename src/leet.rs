//! Leetspeak substitution tables.

use crate::error::TransformError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

const CLASSIC_TABLE: [(char, char); 6] = [
    ('a', '@'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('t', '7'),
    ('s', '5'),
];

// Identity entries are intentional: they still fold the letter to lowercase.
const EXTENDED_TABLE: [(char, char); 26] = [
    ('a', 'a'),
    ('b', 'ß'),
    ('c', 'c'),
    ('d', 'Ð'),
    ('e', '3'),
    ('f', 'ƒ'),
    ('g', '9'),
    ('h', 'h'),
    ('i', '¡'),
    ('j', 'ʝ'),
    ('k', 'k'),
    ('l', '1'),
    ('m', 'm'),
    ('n', 'n'),
    ('o', '0'),
    ('p', 'p'),
    ('q', 'q'),
    ('r', 'r'),
    ('s', '5'),
    ('t', '†'),
    ('u', 'บ'),
    ('v', '√'),
    ('w', 'w'),
    ('x', 'x'),
    ('y', '¥'),
    ('z', '2'),
];

static CLASSIC: Lazy<LeetMapping> = Lazy::new(|| LeetMapping::from_pairs(CLASSIC_TABLE));
static EXTENDED: Lazy<LeetMapping> = Lazy::new(|| LeetMapping::from_pairs(EXTENDED_TABLE));

/// Built-in substitution tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeetPreset {
    /// Six common substitutions (a e i o t s)
    Classic,
    /// A substitute for every letter a-z
    #[default]
    Extended,
}

impl LeetPreset {
    pub fn mapping(&self) -> &'static LeetMapping {
        match self {
            LeetPreset::Classic => &CLASSIC,
            LeetPreset::Extended => &EXTENDED,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LeetPreset::Classic => "classic",
            LeetPreset::Extended => "extended",
        }
    }
}

impl FromStr for LeetPreset {
    type Err = TransformError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "classic" => Ok(LeetPreset::Classic),
            "extended" | "full" => Ok(LeetPreset::Extended),
            invalid => Err(TransformError::Config(format!(
                "unknown leet preset: {invalid}"
            ))),
        }
    }
}

impl std::fmt::Display for LeetPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Partial map from lowercase letter to a substitute character
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeetMapping {
    table: HashMap<char, char>,
}

impl LeetMapping {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            table: pairs.into_iter().collect(),
        }
    }

    /// Substitute for `c`, looked up by its lowercase form.
    ///
    /// Characters outside the table come back unchanged, keeping their case.
    pub fn substitute(&self, c: char) -> char {
        self.table.get(&simple_lowercase(c)).copied().unwrap_or(c)
    }

    /// Apply the substitution to every character of `text`
    pub fn apply(&self, text: &str) -> String {
        text.chars().map(|c| self.substitute(c)).collect()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.table.contains_key(&letter)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Lowercase a single character, keeping it as-is when the lowercase form is
/// more than one character
pub(crate) fn simple_lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Uppercase counterpart of `simple_lowercase`
pub(crate) fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
