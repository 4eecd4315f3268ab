//! Text preprocessing and tokenization.

use super::stopwords::is_stopword;

/// The result of cleaning and tokenizing raw text.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    /// Lowercased text with punctuation/digits replaced by spaces and
    /// whitespace collapsed.
    pub text: String,
    /// Whitespace tokens of `text`.
    pub tokens: Vec<String>,
    /// Whitespace token count of the raw input, before cleaning.
    pub raw_token_count: usize,
    /// Token count after cleaning.
    pub token_count: usize,
}

/// Clean and tokenize raw text.
///
/// Lowercases, replaces ASCII punctuation and digits with spaces
/// (optionally keeping apostrophes so contractions like `don't` survive),
/// collapses runs of whitespace, and splits on whitespace.
pub fn preprocess(raw: &str, keep_apostrophes: bool) -> Preprocessed {
    let lower = raw.to_lowercase();
    let raw_token_count = lower.split_whitespace().count();

    let cleaned: String = lower
        .chars()
        .map(|c| {
            if c == '\'' && keep_apostrophes {
                c
            } else if c.is_ascii_punctuation() || c.is_ascii_digit() {
                ' '
            } else {
                c
            }
        })
        .collect();

    let tokens: Vec<String> = cleaned.split_whitespace().map(str::to_string).collect();
    let text = tokens.join(" ");
    let token_count = tokens.len();

    Preprocessed {
        text,
        tokens,
        raw_token_count,
        token_count,
    }
}

/// Filter stopwords out of a token stream.
///
/// Returns the kept tokens and the number removed.
pub fn remove_stopwords(tokens: &[String]) -> (Vec<String>, usize) {
    let kept: Vec<String> = tokens
        .iter()
        .filter(|t| !is_stopword(t))
        .cloned()
        .collect();
    let removed = tokens.len() - kept.len();
    (kept, removed)
}
