//! Top-N chunk pair selection and snippet extraction

use super::SimilarityMatrix;

/// One cross-document chunk pair with its similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedPair {
    /// Chunk index in document A
    pub row: usize,
    /// Chunk index in document B
    pub col: usize,
    /// Cosine similarity of the pair
    pub score: f64,
}

/// Select the highest-scoring chunk pairs from a similarity matrix
///
/// Returns at most `top_n` pairs sorted by descending score; ties are broken
/// by ascending row then column index so that repeated runs produce the same
/// order. A matrix with fewer entries than `top_n` yields all of them.
pub fn top_pairs(matrix: &SimilarityMatrix, top_n: usize) -> Vec<MatchedPair> {
    let mut pairs: Vec<MatchedPair> = matrix
        .entries()
        .map(|(row, col, score)| MatchedPair { row, col, score })
        .collect();

    pairs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.row.cmp(&b.row))
            .then_with(|| a.col.cmp(&b.col))
    });
    pairs.truncate(top_n);
    pairs
}

/// Truncate chunk text to a snippet of at most `max_chars` characters
///
/// Cuts at a whitespace boundary, never mid-token, and appends "..." only
/// when something was cut. A single token longer than the bound is cut hard
/// since no boundary exists.
pub fn truncate_snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let snippet = match cut.rfind(char::is_whitespace) {
        Some(boundary) => cut[..boundary].trim_end(),
        None => cut.as_str(),
    };
    format!("{}...", snippet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::similarity::SimilarityEngine;
    use crate::vector::Weighting;

    fn doc(paragraphs: &[&str]) -> Document {
        Document::from_paragraphs(paragraphs.iter().map(|p| p.to_string()).collect())
    }

    fn test_matrix() -> SimilarityMatrix {
        let engine = SimilarityEngine::new(1, Weighting::Tf, false);
        let a = doc(&["apple banana cherry", "dog wolf fox"]);
        let b = doc(&["apple banana cherry", "owl hawk eagle"]);
        engine.chunk_matrix(&a, &b)
    }

    #[test]
    fn test_top_pair_is_best_match() {
        let pairs = top_pairs(&test_matrix(), 1);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].row, pairs[0].col), (0, 0));
        assert!((pairs[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_scores_non_increasing() {
        let pairs = top_pairs(&test_matrix(), 4);
        for window in pairs.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn test_top_n_exceeding_pairs_returns_all() {
        let pairs = top_pairs(&test_matrix(), 100);
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn test_tie_break_ascending_row_then_col() {
        // All-disjoint chunks: every score is 0, so order is purely the
        // tie-break.
        let engine = SimilarityEngine::new(1, Weighting::Tf, false);
        let a = doc(&["aa bb", "cc dd"]);
        let b = doc(&["ee ff", "gg hh"]);
        let matrix = engine.chunk_matrix(&a, &b);

        let pairs = top_pairs(&matrix, 4);
        let order: Vec<(usize, usize)> = pairs.iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_snippet_short_text_untouched() {
        assert_eq!(truncate_snippet("short text", 240), "short text");
    }

    #[test]
    fn test_snippet_cuts_at_whitespace() {
        let text = "alpha beta gamma delta epsilon";
        let snippet = truncate_snippet(text, 14);
        // 14 chars reach into "gamma"; the cut backs up to the last boundary.
        assert_eq!(snippet, "alpha beta...");
    }

    #[test]
    fn test_snippet_never_splits_token() {
        let text = "alpha beta gamma delta";
        for bound in 6..text.len() {
            let snippet = truncate_snippet(text, bound);
            let body = snippet.trim_end_matches("...");
            for token in body.split_whitespace() {
                assert!(
                    text.split_whitespace().any(|t| t == token),
                    "token {:?} was split at bound {}",
                    token,
                    bound
                );
            }
        }
    }

    #[test]
    fn test_snippet_single_long_token() {
        let snippet = truncate_snippet("abcdefghijklmnop", 5);
        assert_eq!(snippet, "abcde...");
    }
}
