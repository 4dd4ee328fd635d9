//! Case transformations.

use crate::leet::{simple_lowercase, simple_uppercase};
use rand::Rng;

/// Randomize the case of every character with a fair coin per character.
///
/// Uses the thread-local generator; output is not reproducible.
pub fn random_case(text: &str) -> String {
    random_case_with(text, &mut rand::thread_rng())
}

/// `random_case` driven by a caller supplied generator.
///
/// Each character is mapped with single-character case conversion, so the
/// output has exactly as many characters as the input.
pub fn random_case_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    text.chars()
        .map(|c| {
            if rng.gen_bool(0.5) {
                simple_uppercase(c)
            } else {
                simple_lowercase(c)
            }
        })
        .collect()
}

/// Uppercase every character.
///
/// Characters whose uppercase form is longer than one character (`ß`, `ŉ`)
/// are kept, so the character count never changes.
pub fn to_upper(text: &str) -> String {
    text.chars().map(simple_uppercase).collect()
}

/// Lowercase every character, keeping those that would expand (`İ`)
pub fn to_lower(text: &str) -> String {
    text.chars().map(simple_lowercase).collect()
}
