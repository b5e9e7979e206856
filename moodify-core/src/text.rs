//! Text normalization for pattern matching
//!
//! Rule matching always runs on normalized text; threshold token counting
//! runs on the raw text.

/// Normalize text for keyword and phrase matching.
///
/// Maps Unicode curly quotes and apostrophes to their ASCII equivalents
/// (so "can’t" matches "can't") and lower-cases the result.
pub fn normalize(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .to_lowercase()
}

/// Whitespace token count of the raw text
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
