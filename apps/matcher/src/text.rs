//! Shared tokenization for the skill dictionary and the similarity engine.
//!
//! Tokens are lower-cased alphanumeric runs. The stop-word list is fixed so
//! two passes over the same text always produce the same token stream.

/// English stop words, sorted for binary search. Kept deliberately small:
/// job descriptions are short documents and aggressive stopping hurts recall.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "in",
    "is", "it", "its", "of", "on", "or", "our", "that", "the", "their", "this", "to", "was",
    "we", "were", "will", "with", "you", "your",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Splits text into lower-cased alphanumeric runs, keeping stop words.
/// Used where positional structure matters (phrase matching).
pub fn raw_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Tokenizes for vector-space use: lower-cased alphanumeric runs with stop
/// words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    raw_tokens(text)
        .into_iter()
        .filter(|t| !is_stop_word(t))
        .collect()
}
