//! Similarity engine: cosine and Jaccard scoring, chunk matrix construction
//!
//! All scores land in [0, 1]. Degenerate inputs (empty vectors, empty sets)
//! score 0 rather than erroring; two empty texts are reported as non-similar
//! by policy, since an intersection-over-union of nothing is undefined.

mod pairs;

pub use pairs::{top_pairs, truncate_snippet, MatchedPair};

use std::collections::HashSet;

use crate::document::Document;
use crate::vector::{Vectorizer, Weighting};

/// Cosine similarity between two equal-length vectors
///
/// Defined as 0 when either vector has zero norm (no shared vocabulary is
/// not an error). Clamped to [0, 1] against floating-point drift.
pub fn cosine(u: &[f64], v: &[f64]) -> f64 {
    debug_assert_eq!(u.len(), v.len());

    let mut dot = 0.0;
    let mut norm_u = 0.0;
    let mut norm_v = 0.0;
    for (a, b) in u.iter().zip(v.iter()) {
        dot += a * b;
        norm_u += a * a;
        norm_v += b * b;
    }

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }

    (dot / (norm_u.sqrt() * norm_v.sqrt())).clamp(0.0, 1.0)
}

/// Jaccard similarity between two n-gram sets
///
/// Intersection over union; 0 when the union is empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Pairwise chunk similarity matrix
///
/// Rows are chunks of document A, columns chunks of document B, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        SimilarityMatrix {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Matrix shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.cols + col] = value;
    }

    /// All entries as (row, col, score), row-major order
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let cols = self.cols;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &score)| (i / cols, i % cols, score))
    }

    /// Mean of per-row maxima
    ///
    /// The chunked document score: for every chunk of A take its best match
    /// in B, then average. Rewards documents where each A-chunk has some
    /// strong counterpart, instead of diluting the score across all pairs
    /// the way a plain matrix mean would.
    pub fn mean_row_max(&self) -> f64 {
        if self.rows == 0 || self.cols == 0 {
            return 0.0;
        }

        let sum: f64 = (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.get(row, col))
                    .fold(0.0, f64::max)
            })
            .sum();
        sum / self.rows as f64
    }
}

/// Similarity engine over a fixed n-gram order and weighting scheme
pub struct SimilarityEngine {
    vectorizer: Vectorizer,
}

impl SimilarityEngine {
    /// Create a new similarity engine
    pub fn new(ngram_size: usize, weighting: Weighting, fold_diacritics: bool) -> Self {
        SimilarityEngine {
            vectorizer: Vectorizer::new(ngram_size, weighting, fold_diacritics),
        }
    }

    /// Cosine similarity between two whole texts over a shared vocabulary
    pub fn global_score(&self, text_a: &str, text_b: &str) -> f64 {
        let (vectors, _) = self.vectorizer.vectorize_batch(&[text_a, text_b]);
        cosine(&vectors[0], &vectors[1])
    }

    /// Full pairwise chunk similarity matrix
    ///
    /// Every chunk of both documents is vectorized in one batch so that all
    /// chunk vectors share a vocabulary, then each A-chunk is scored against
    /// each B-chunk.
    pub fn chunk_matrix(&self, doc_a: &Document, doc_b: &Document) -> SimilarityMatrix {
        let texts: Vec<&str> = doc_a
            .chunks()
            .iter()
            .chain(doc_b.chunks().iter())
            .map(|c| c.text.as_str())
            .collect();
        let (vectors, _) = self.vectorizer.vectorize_batch(&texts);

        let rows = doc_a.chunk_count();
        let cols = doc_b.chunk_count();
        let (vectors_a, vectors_b) = vectors.split_at(rows);

        let mut matrix = SimilarityMatrix::new(rows, cols);
        for (i, u) in vectors_a.iter().enumerate() {
            for (j, v) in vectors_b.iter().enumerate() {
                matrix.set(i, j, cosine(u, v));
            }
        }
        matrix
    }
}
