//! Letter, word, and n-gram frequency counters.

use std::collections::HashMap;

/// Count ASCII letters `a`-`z` in the text, case-insensitively.
///
/// Returns the per-letter counts and the total number of letters counted.
pub fn letter_frequency(text: &str) -> (HashMap<char, usize>, usize) {
    let mut counts = HashMap::new();
    let mut total = 0;

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            *counts.entry(c.to_ascii_lowercase()).or_insert(0) += 1;
            total += 1;
        }
    }

    (counts, total)
}

/// Count occurrences of each token.
pub fn word_frequency(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Count space-joined n-grams over a token stream.
///
/// `n == 0` or `n` greater than the token count yields an empty map.
pub fn ngram_counts(tokens: &[String], n: usize) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    if n == 0 {
        return counts;
    }
    for window in tokens.windows(n) {
        *counts.entry(window.join(" ")).or_insert(0) += 1;
    }
    counts
}

/// The `k` highest counts, ordered by count descending, then token
/// ascending so ties are deterministic.
pub fn top_k(counts: &HashMap<String, usize>, k: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> =
        counts.iter().map(|(t, &c)| (t.clone(), c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}
