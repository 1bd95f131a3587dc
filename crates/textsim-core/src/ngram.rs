//! Word-level n-gram extraction
//!
//! An n-gram is the space-joined form of `n` consecutive tokens. The same
//! n-grams serve as vector-space dimensions (with multiplicity) and as set
//! elements for Jaccard scoring (duplicates collapsed).

use std::collections::HashSet;

/// Extract the ordered sequence of n-grams from a token sequence
///
/// Sliding window of `n` tokens, step 1. Fewer than `n` tokens yields an
/// empty sequence; that is a valid result, not an error.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    tokens.windows(n).map(|w| w.join(" ")).collect()
}

/// Extract the set of distinct n-grams from a token sequence
pub fn ngram_set(tokens: &[String], n: usize) -> HashSet<String> {
    ngrams(tokens, n).into_iter().collect()
}
