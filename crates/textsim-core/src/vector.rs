//! Term-frequency vector space construction
//!
//! A batch of texts is vectorized against one shared [`Vocabulary`] so that
//! the resulting vectors are directly comparable. Vocabularies are built
//! fresh per comparison and never shared across calls.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TextsimError;
use crate::ngram::ngrams;
use crate::text::tokenize_with_folding;

/// Term weighting scheme for document vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Raw term frequency
    Tf,
    /// Term frequency scaled by smoothed inverse document frequency
    #[default]
    TfIdf,
}

impl FromStr for Weighting {
    type Err = TextsimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tf" => Ok(Weighting::Tf),
            "tfidf" | "tf-idf" => Ok(Weighting::TfIdf),
            other => Err(TextsimError::invalid_parameter(
                "weighting",
                other,
                "expected: tf or tfidf",
            )),
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weighting::Tf => write!(f, "tf"),
            Weighting::TfIdf => write!(f, "tfidf"),
        }
    }
}

/// Mapping from n-gram to dense dimension index, in first-seen order
#[derive(Debug, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    fn intern(&mut self, gram: &str) -> usize {
        if let Some(&dim) = self.index.get(gram) {
            return dim;
        }
        let dim = self.terms.len();
        self.index.insert(gram.to_string(), dim);
        self.terms.push(gram.to_string());
        dim
    }

    /// Number of dimensions
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Look up the dimension index of an n-gram
    pub fn dimension_of(&self, gram: &str) -> Option<usize> {
        self.index.get(gram).copied()
    }

    /// Look up the n-gram at a dimension index
    pub fn term(&self, dim: usize) -> Option<&str> {
        self.terms.get(dim).map(|t| t.as_str())
    }
}

/// Batch vectorizer over a shared vocabulary
#[derive(Debug, Clone, Copy)]
pub struct Vectorizer {
    ngram_size: usize,
    weighting: Weighting,
    fold_diacritics: bool,
}

impl Vectorizer {
    /// Create a vectorizer for a given n-gram order and weighting scheme
    pub fn new(ngram_size: usize, weighting: Weighting, fold_diacritics: bool) -> Self {
        Vectorizer {
            ngram_size,
            weighting,
            fold_diacritics,
        }
    }

    /// Vectorize a batch of texts against one shared vocabulary
    ///
    /// Returns one vector per input text, all of length `vocabulary.len()`,
    /// plus the vocabulary itself. Dimension order is the first-seen order of
    /// n-grams across the batch, so identical inputs always produce identical
    /// vectors.
    pub fn vectorize_batch(&self, texts: &[&str]) -> (Vec<Vec<f64>>, Vocabulary) {
        let mut vocabulary = Vocabulary::default();
        let mut sparse_counts: Vec<HashMap<usize, f64>> = Vec::with_capacity(texts.len());

        for text in texts {
            let tokens = tokenize_with_folding(text, self.fold_diacritics);
            let mut counts: HashMap<usize, f64> = HashMap::new();
            for gram in ngrams(&tokens, self.ngram_size) {
                let dim = vocabulary.intern(&gram);
                *counts.entry(dim).or_insert(0.0) += 1.0;
            }
            sparse_counts.push(counts);
        }

        let idf = match self.weighting {
            Weighting::Tf => None,
            Weighting::TfIdf => Some(self.compute_idf(&sparse_counts, vocabulary.len())),
        };

        let vectors = sparse_counts
            .iter()
            .map(|counts| {
                let mut vector = vec![0.0; vocabulary.len()];
                for (&dim, &tf) in counts {
                    vector[dim] = match &idf {
                        Some(idf) => tf * idf[dim],
                        None => tf,
                    };
                }
                vector
            })
            .collect();

        (vectors, vocabulary)
    }

    /// Smoothed inverse document frequency per dimension
    ///
    /// `idf = ln((1 + N) / (1 + df)) + 1`. The +1 smoothing inside the ratio
    /// keeps the quotient finite; the +1 addend keeps terms present in every
    /// text at a positive weight instead of vanishing from the space.
    fn compute_idf(&self, sparse_counts: &[HashMap<usize, f64>], dims: usize) -> Vec<f64> {
        let n = sparse_counts.len() as f64;
        let mut df = vec![0usize; dims];
        for counts in sparse_counts {
            for &dim in counts.keys() {
                df[dim] += 1;
            }
        }

        df.iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect()
    }
}
