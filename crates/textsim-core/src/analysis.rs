//! Analysis orchestration
//!
//! [`Analyzer`] wires the normalizer, n-gram extractor, vectorizer and
//! similarity engine into the two response shapes consumed by callers:
//! short-text comparison and whole-document comparison.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::document::Document;
use crate::error::{DocSide, Result, TextsimError};
use crate::ngram::ngram_set;
use crate::similarity::{top_pairs, truncate_snippet, SimilarityEngine};
use crate::text::tokenize_with_folding;
use crate::vector::{Vectorizer, Weighting};

/// Result of a short-text comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortTextResult {
    /// Jaccard similarity over the two n-gram sets
    pub jaccard_similarity: f64,
    /// Cosine similarity over the two term-frequency vectors
    pub cosine_similarity: f64,
}

/// One ranked chunk pair in a document comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Dense rank, 1 = most similar
    pub rank: usize,
    /// Cosine similarity of the pair
    pub score: f64,
    /// 1-based chunk position in document A
    #[serde(rename = "docA_part_index")]
    pub doc_a_part_index: usize,
    /// 1-based chunk position in document B
    #[serde(rename = "docB_part_index")]
    pub doc_b_part_index: usize,
    /// Bounded snippet of the A chunk
    #[serde(rename = "docA_text_snippet")]
    pub doc_a_text_snippet: String,
    /// Bounded snippet of the B chunk
    #[serde(rename = "docB_text_snippet")]
    pub doc_b_text_snippet: String,
}

/// Result of a whole-document comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Cosine similarity of the whole-text vectors
    pub global_similarity_score: f64,
    /// Mean of per-row maxima over the chunk matrix
    pub chunked_similarity_score: f64,
    /// Chunk matrix shape as [rows, cols]
    pub matrix_shape: (usize, usize),
    /// Top-N most similar chunk pairs, best first
    pub most_similar_pairs: Vec<MatchResult>,
}

/// Orchestrates the similarity pipeline for both analysis modes
///
/// Stateless between calls: every comparison builds its own vocabulary and
/// shares nothing with other requests.
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer with the given configuration
    pub fn new(config: AnalysisConfig) -> Self {
        Analyzer { config }
    }

    /// Compare two short texts, producing Jaccard and cosine scores
    ///
    /// The cosine side always uses raw term frequencies; IDF over a
    /// two-text batch adds nothing for quick comparisons.
    #[tracing::instrument(skip(self, text_a, text_b))]
    pub fn analyze_short_text(
        &self,
        text_a: &str,
        text_b: &str,
        ngram_size: usize,
    ) -> Result<ShortTextResult> {
        validate_positive("n", ngram_size)?;

        let fold = self.config.fold_diacritics;
        let tokens_a = tokenize_with_folding(text_a, fold);
        let tokens_b = tokenize_with_folding(text_b, fold);
        let jaccard_similarity = crate::similarity::jaccard(
            &ngram_set(&tokens_a, ngram_size),
            &ngram_set(&tokens_b, ngram_size),
        );

        let vectorizer = Vectorizer::new(ngram_size, Weighting::Tf, fold);
        let (vectors, _) = vectorizer.vectorize_batch(&[text_a, text_b]);
        let cosine_similarity = crate::similarity::cosine(&vectors[0], &vectors[1]);

        Ok(ShortTextResult {
            jaccard_similarity,
            cosine_similarity,
        })
    }

    /// Compare two documents: global score, chunk matrix and top pairs
    #[tracing::instrument(skip_all, fields(chunks_a = doc_a.chunk_count(), chunks_b = doc_b.chunk_count()))]
    pub fn analyze_documents(
        &self,
        doc_a: &Document,
        doc_b: &Document,
        ngram_size: usize,
        top_n: usize,
    ) -> Result<AnalysisResult> {
        validate_positive("n", ngram_size)?;
        validate_positive("top_n", top_n)?;
        self.validate_documents(doc_a, doc_b)?;

        let engine = SimilarityEngine::new(ngram_size, self.config.weighting, self.config.fold_diacritics);

        let global_similarity_score = engine.global_score(doc_a.raw_text(), doc_b.raw_text());

        let matrix = engine.chunk_matrix(doc_a, doc_b);
        let chunked_similarity_score = matrix.mean_row_max();

        let most_similar_pairs = top_pairs(&matrix, top_n)
            .into_iter()
            .enumerate()
            .map(|(i, pair)| MatchResult {
                rank: i + 1,
                score: pair.score,
                doc_a_part_index: pair.row + 1,
                doc_b_part_index: pair.col + 1,
                doc_a_text_snippet: truncate_snippet(
                    &doc_a.chunks()[pair.row].text,
                    self.config.snippet_chars,
                ),
                doc_b_text_snippet: truncate_snippet(
                    &doc_b.chunks()[pair.col].text,
                    self.config.snippet_chars,
                ),
            })
            .collect();

        tracing::debug!(
            global = global_similarity_score,
            chunked = chunked_similarity_score,
            "analysis complete"
        );

        Ok(AnalysisResult {
            global_similarity_score,
            chunked_similarity_score,
            matrix_shape: matrix.shape(),
            most_similar_pairs,
        })
    }

    fn validate_documents(&self, doc_a: &Document, doc_b: &Document) -> Result<()> {
        for (side, doc) in [(DocSide::A, doc_a), (DocSide::B, doc_b)] {
            if doc.chunk_count() == 0 {
                return Err(TextsimError::empty_document(
                    side,
                    format!(
                        "no paragraph of at least {} characters",
                        self.config.min_chunk_chars
                    ),
                ));
            }
        }

        let pair_count = doc_a.chunk_count().saturating_mul(doc_b.chunk_count());
        if pair_count > self.config.max_chunk_pairs {
            return Err(TextsimError::ResourceLimit {
                chunks_a: doc_a.chunk_count(),
                chunks_b: doc_b.chunk_count(),
                limit: self.config.max_chunk_pairs,
            });
        }
        Ok(())
    }
}

fn validate_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(TextsimError::invalid_parameter(name, value, "must be >= 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new(AnalysisConfig::default())
    }

    fn doc(paragraphs: &[&str]) -> Document {
        Document::from_paragraphs(paragraphs.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_short_text_identical() {
        let result = analyzer().analyze_short_text("cat dog", "cat dog", 1).unwrap();
        assert_eq!(result.jaccard_similarity, 1.0);
        assert!((result.cosine_similarity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_short_text_disjoint() {
        let result = analyzer()
            .analyze_short_text("cat dog", "fish bird", 1)
            .unwrap();
        assert_eq!(result.jaccard_similarity, 0.0);
        assert_eq!(result.cosine_similarity, 0.0);
    }

    #[test]
    fn test_short_text_rejects_zero_n() {
        let err = analyzer().analyze_short_text("a", "b", 0).unwrap_err();
        assert!(matches!(err, TextsimError::InvalidParameter { .. }));
    }

    #[test]
    fn test_short_text_ngram_longer_than_input() {
        let result = analyzer().analyze_short_text("one two", "one two", 4).unwrap();
        assert_eq!(result.jaccard_similarity, 0.0);
        assert_eq!(result.cosine_similarity, 0.0);
    }

    #[test]
    fn test_short_text_empty_inputs_score_zero() {
        let result = analyzer().analyze_short_text("", "", 1).unwrap();
        assert_eq!(result.jaccard_similarity, 0.0);
        assert_eq!(result.cosine_similarity, 0.0);
    }

    #[test]
    fn test_documents_matrix_shape() {
        let a = doc(&["first paragraph text", "second paragraph text", "third one"]);
        let b = doc(&["left hand text", "right hand text"]);
        let result = analyzer().analyze_documents(&a, &b, 1, 3).unwrap();
        assert_eq!(result.matrix_shape, (3, 2));
    }

    #[test]
    fn test_documents_identical_scores_one() {
        let a = doc(&["the quick brown fox jumps", "pack my box with jugs"]);
        let result = analyzer().analyze_documents(&a, &a, 2, 3).unwrap();
        assert!((result.global_similarity_score - 1.0).abs() < 1e-9);
        assert!((result.chunked_similarity_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_documents_ranks_dense_and_sorted() {
        let a = doc(&["apple banana cherry", "dog wolf fox", "sun moon star"]);
        let b = doc(&["apple banana plum", "dog cat fox", "rain snow wind"]);
        let result = analyzer().analyze_documents(&a, &b, 1, 5).unwrap();

        let ranks: Vec<usize> = result.most_similar_pairs.iter().map(|m| m.rank).collect();
        assert_eq!(ranks, (1..=result.most_similar_pairs.len()).collect::<Vec<_>>());
        for window in result.most_similar_pairs.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn test_documents_top_n_capped_by_available_pairs() {
        let a = doc(&["apple banana cherry"]);
        let b = doc(&["apple banana plum", "dog cat fox"]);
        let result = analyzer().analyze_documents(&a, &b, 1, 10).unwrap();
        assert_eq!(result.most_similar_pairs.len(), 2);
    }

    #[test]
    fn test_documents_part_indices_are_one_based() {
        let a = doc(&["apple banana cherry"]);
        let b = doc(&["apple banana cherry"]);
        let result = analyzer().analyze_documents(&a, &b, 1, 1).unwrap();
        assert_eq!(result.most_similar_pairs[0].doc_a_part_index, 1);
        assert_eq!(result.most_similar_pairs[0].doc_b_part_index, 1);
    }

    #[test]
    fn test_documents_swap_symmetry() {
        let a = doc(&["apple banana cherry", "dog wolf fox"]);
        let b = doc(&["apple banana plum", "owl hawk eagle", "dog cat pig"]);

        let ab = analyzer().analyze_documents(&a, &b, 1, 6).unwrap();
        let ba = analyzer().analyze_documents(&b, &a, 1, 6).unwrap();

        assert!((ab.global_similarity_score - ba.global_similarity_score).abs() < 1e-12);
        assert_eq!(ab.matrix_shape, (2, 3));
        assert_eq!(ba.matrix_shape, (3, 2));

        // Every AB pair appears in BA with its indices swapped.
        for pair in &ab.most_similar_pairs {
            assert!(
                ba.most_similar_pairs.iter().any(|p| {
                    p.doc_a_part_index == pair.doc_b_part_index
                        && p.doc_b_part_index == pair.doc_a_part_index
                        && (p.score - pair.score).abs() < 1e-12
                }),
                "pair ({}, {}) missing after swap",
                pair.doc_a_part_index,
                pair.doc_b_part_index
            );
        }
    }

    #[test]
    fn test_documents_empty_side_rejected() {
        let a = doc(&[]);
        let b = doc(&["some usable paragraph"]);

        let err = analyzer().analyze_documents(&a, &b, 1, 3).unwrap_err();
        assert!(matches!(
            err,
            TextsimError::EmptyDocument {
                side: DocSide::A,
                ..
            }
        ));

        let err = analyzer().analyze_documents(&b, &a, 1, 3).unwrap_err();
        assert!(matches!(
            err,
            TextsimError::EmptyDocument {
                side: DocSide::B,
                ..
            }
        ));
    }

    #[test]
    fn test_documents_chunk_pair_limit() {
        let config = AnalysisConfig {
            max_chunk_pairs: 3,
            ..Default::default()
        };
        let a = doc(&["one chunk text", "two chunk text"]);
        let b = doc(&["three chunk text", "four chunk text"]);

        let err = Analyzer::new(config)
            .analyze_documents(&a, &b, 1, 3)
            .unwrap_err();
        assert!(matches!(err, TextsimError::ResourceLimit { limit: 3, .. }));
    }

    #[test]
    fn test_documents_deterministic_output() {
        let a = doc(&["the quick brown fox jumps", "pack my box with jugs"]);
        let b = doc(&["the quick brown dog sleeps", "pack my bag with care"]);

        let first = analyzer().analyze_documents(&a, &b, 2, 4).unwrap();
        let second = analyzer().analyze_documents(&a, &b, 2, 4).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_result_wire_field_names() {
        let a = doc(&["apple banana cherry"]);
        let result = analyzer().analyze_documents(&a, &a, 1, 1).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("global_similarity_score").is_some());
        assert!(json.get("chunked_similarity_score").is_some());
        assert_eq!(json["matrix_shape"], serde_json::json!([1, 1]));
        let pair = &json["most_similar_pairs"][0];
        assert!(pair.get("docA_part_index").is_some());
        assert!(pair.get("docB_part_index").is_some());
        assert!(pair.get("docA_text_snippet").is_some());
        assert!(pair.get("docB_text_snippet").is_some());
    }
}
