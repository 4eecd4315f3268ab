//! Frequency statistics over raw book text.
//!
//! This module contains:
//! - Preprocessing and tokenization
//! - Stopword filtering against an embedded English list
//! - Letter, word, and n-gram frequency counters

mod freq;
mod stopwords;
mod text;

pub use freq::{letter_frequency, ngram_counts, top_k, word_frequency};
pub use stopwords::{STOPWORDS, is_stopword};
pub use text::{Preprocessed, preprocess, remove_stopwords};
