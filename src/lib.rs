//! Text transformations for a selected span of text: random case, upper and
//! lower case, leetspeak, emoji substitution, and binary/hex/base64 encodings
//! of the UTF-8 bytes.
//!
//! ```
//! use randomcase::{KeywordIndex, TextTransformer, Transformation, EmojiStrategy};
//!
//! let index = KeywordIndex::parse_table("emoji,name\n🐱,cats\n");
//! let transformer = TextTransformer::new()
//!     .with_keyword_index(index)
//!     .with_emoji_strategy(EmojiStrategy::Keyword);
//!
//! assert_eq!(transformer.transform(Transformation::Emojify, "I love cats"), "I love cats 🐱");
//! assert_eq!(transformer.transform(Transformation::Hex, "Hi"), "48 69");
//! ```

pub mod case;
pub mod catalog;
pub mod config;
pub mod emoji;
pub mod encoding;
pub mod error;
pub mod keyword_index;
pub mod leet;
pub mod selection;
pub mod transformation;
pub mod transformer;

pub use case::{random_case, random_case_with, to_lower, to_upper};
pub use catalog::{EmojiCatalog, EmojiRecord};
pub use config::Config;
pub use emoji::{
    emojify_by_catalog, emojify_by_catalog_with, emojify_by_keyword, emojify_by_replacement,
    EmojiStrategy, MatchCase,
};
pub use encoding::{
    decode_base64, decode_binary, decode_hex, to_base64_string, to_binary_string, to_hex_string,
};
pub use error::{Result, TransformError};
pub use keyword_index::KeywordIndex;
pub use leet::{LeetMapping, LeetPreset};
pub use selection::Selection;
pub use transformation::Transformation;
pub use transformer::TextTransformer;
