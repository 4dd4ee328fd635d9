use crate::case::{random_case_with, to_lower, to_upper};
use crate::catalog::EmojiCatalog;
use crate::emoji::{
    emojify_by_catalog_with, emojify_by_keyword, emojify_by_replacement, EmojiStrategy, MatchCase,
};
use crate::encoding::{to_base64_string, to_binary_string, to_hex_string};
use crate::error::Result;
use crate::keyword_index::KeywordIndex;
use crate::leet::{LeetMapping, LeetPreset};
use crate::selection::Selection;
use crate::transformation::Transformation;
use once_cell::sync::Lazy;
use rand::Rng;
use tracing::{debug, warn};

static EMPTY_INDEX: Lazy<KeywordIndex> = Lazy::new(KeywordIndex::new);
static EMPTY_CATALOG: Lazy<EmojiCatalog> = Lazy::new(EmojiCatalog::default);

/// Lookup tables and options shared by every transformation call.
///
/// Built once and then only read, so a single instance can be shared across
/// threads. Missing tables behave as empty ones.
#[derive(Debug, Clone)]
pub struct TextTransformer {
    keyword_index: Option<KeywordIndex>,
    catalog: Option<EmojiCatalog>,
    leet: LeetMapping,
    emoji_strategy: EmojiStrategy,
    catalog_match: MatchCase,
}

impl Default for TextTransformer {
    fn default() -> Self {
        Self {
            keyword_index: None,
            catalog: None,
            leet: LeetPreset::default().mapping().clone(),
            emoji_strategy: EmojiStrategy::default(),
            catalog_match: MatchCase::default(),
        }
    }
}

impl TextTransformer {
    /// Transformer without emoji tables, using the default leet preset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword_index(mut self, index: KeywordIndex) -> Self {
        self.keyword_index = Some(index);
        self
    }

    pub fn with_catalog(mut self, catalog: EmojiCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_leet(mut self, leet: LeetMapping) -> Self {
        self.leet = leet;
        self
    }

    pub fn with_leet_preset(self, preset: LeetPreset) -> Self {
        self.with_leet(preset.mapping().clone())
    }

    pub fn with_emoji_strategy(mut self, strategy: EmojiStrategy) -> Self {
        self.emoji_strategy = strategy;
        self
    }

    pub fn with_catalog_match(mut self, case: MatchCase) -> Self {
        self.catalog_match = case;
        self
    }

    /// Keyword index, or an empty one when none was supplied
    pub fn keyword_index(&self) -> &KeywordIndex {
        self.keyword_index.as_ref().unwrap_or(&*EMPTY_INDEX)
    }

    /// Catalog, or an empty one when none was supplied
    pub fn catalog(&self) -> &EmojiCatalog {
        self.catalog.as_ref().unwrap_or(&*EMPTY_CATALOG)
    }

    pub fn leet(&self) -> &LeetMapping {
        &self.leet
    }

    pub fn emoji_strategy(&self) -> EmojiStrategy {
        self.emoji_strategy
    }

    /// Apply `kind` using the thread-local random generator
    pub fn transform(&self, kind: Transformation, text: &str) -> String {
        self.transform_with_rng(kind, text, &mut rand::thread_rng())
    }

    /// Apply `kind`; `rng` is only consulted by random case
    pub fn transform_with_rng<R: Rng + ?Sized>(
        &self,
        kind: Transformation,
        text: &str,
        rng: &mut R,
    ) -> String {
        match kind {
            Transformation::RandomCase => random_case_with(text, rng),
            Transformation::Upper => to_upper(text),
            Transformation::Lower => to_lower(text),
            Transformation::Emojify => self.emojify(text),
            Transformation::Leet => self.leet.apply(text),
            Transformation::Binary => to_binary_string(text),
            Transformation::Hex => to_hex_string(text),
            Transformation::Base64 => to_base64_string(text),
        }
    }

    /// Emoji substitution with the configured strategy
    pub fn emojify(&self, text: &str) -> String {
        match self.emoji_strategy {
            EmojiStrategy::Keyword => emojify_by_keyword(text, self.keyword_index()),
            EmojiStrategy::Catalog => {
                emojify_by_catalog_with(text, self.catalog(), self.catalog_match)
            }
            EmojiStrategy::Replace => emojify_by_replacement(text, self.catalog()),
        }
    }

    /// Apply the transformation at menu position `index`.
    ///
    /// Positions outside the menu leave the text unchanged.
    pub fn apply_index(&self, index: usize, text: &str) -> String {
        match Transformation::from_index(index) {
            Some(kind) => self.transform(kind, text),
            None => {
                warn!(index, "Unknown transformation index; leaving text unchanged");
                text.to_string()
            }
        }
    }

    /// Transform the characters `[start, end)` of `text` in place
    pub fn apply_to_selection(
        &self,
        text: &str,
        start: usize,
        end: usize,
        kind: Transformation,
    ) -> Result<String> {
        self.apply_to_selection_with_rng(text, start, end, kind, &mut rand::thread_rng())
    }

    /// `apply_to_selection` with a caller supplied random generator
    pub fn apply_to_selection_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        start: usize,
        end: usize,
        kind: Transformation,
        rng: &mut R,
    ) -> Result<String> {
        let out = Selection::new(start, end)
            .splice(text, |selected| self.transform_with_rng(kind, selected, rng))?;
        debug!(%kind, start, end, "Transformed selection");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmojiRecord;
    use crate::error::TransformError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn transformer() -> TextTransformer {
        TextTransformer::new()
            .with_keyword_index([("cats", "🐱")].into_iter().collect())
            .with_catalog(EmojiCatalog::new(vec![EmojiRecord::new(
                "grinning",
                ["happy", "glad"],
                "😀",
                "people",
            )]))
    }

    #[test]
    fn test_apply_index_menu() {
        let t = transformer().with_leet_preset(LeetPreset::Classic);
        assert_eq!(t.apply_index(1, "abc"), "ABC");
        assert_eq!(t.apply_index(2, "ABC"), "abc");
        assert_eq!(t.apply_index(3, "happy cats"), "happy 😀 cats");
        assert_eq!(t.apply_index(4, "test"), "7357");
        assert_eq!(t.apply_index(5, "A"), "01000001");
        assert_eq!(t.apply_index(6, "A"), "41");
        assert_eq!(t.apply_index(7, "A"), "QQ==");
    }

    #[test]
    fn test_unknown_index_is_identity() {
        assert_eq!(transformer().apply_index(42, "keep me"), "keep me");
    }

    #[test]
    fn test_strategy_selection() {
        let t = transformer().with_emoji_strategy(EmojiStrategy::Keyword);
        assert_eq!(t.emojify("happy cats"), "happy cats 🐱");

        let t = transformer().with_emoji_strategy(EmojiStrategy::Replace);
        assert_eq!(t.emojify("Happy cats"), "😀 cats");
    }

    #[test]
    fn test_catalog_match_mode() {
        let t = transformer().with_catalog_match(MatchCase::Insensitive);
        assert_eq!(t.emojify("HAPPY"), "HAPPY 😀");
        assert_eq!(transformer().emojify("HAPPY"), "HAPPY");
    }

    #[test]
    fn test_missing_tables_act_empty() {
        let t = TextTransformer::new();
        assert!(t.keyword_index().is_empty());
        assert!(t.catalog().is_empty());
        for strategy in [EmojiStrategy::Keyword, EmojiStrategy::Catalog, EmojiStrategy::Replace] {
            let t = TextTransformer::new().with_emoji_strategy(strategy);
            assert_eq!(t.emojify("happy cats"), "happy cats");
        }
    }

    #[test]
    fn test_default_leet_is_extended() {
        assert_eq!(TextTransformer::new().transform(Transformation::Leet, "zz"), "22");
    }

    #[test]
    fn test_seeded_random_case() {
        let t = transformer();
        let a = t.transform_with_rng(
            Transformation::RandomCase,
            "random case",
            &mut ChaCha20Rng::seed_from_u64(3),
        );
        let b = t.transform_with_rng(
            Transformation::RandomCase,
            "random case",
            &mut ChaCha20Rng::seed_from_u64(3),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_to_selection() {
        let t = transformer();
        assert_eq!(
            t.apply_to_selection("I love cats", 7, 11, Transformation::Upper).unwrap(),
            "I love CATS"
        );
        assert_eq!(
            t.apply_to_selection("x=Hi;", 2, 4, Transformation::Hex).unwrap(),
            "x=48 69;"
        );
        assert!(matches!(
            t.apply_to_selection("abc", 1, 1, Transformation::Upper),
            Err(TransformError::InvalidSelection { .. })
        ));
    }
}
