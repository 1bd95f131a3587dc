//! Document and chunk types for file comparison
//!
//! A document is an ordered sequence of paragraph-level chunks plus the full
//! raw text used for the global (whole-document) vector. Documents are built
//! once per comparison and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One paragraph-level unit of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Stable position within the document's kept chunks
    pub index: usize,
    /// Paragraph text, trimmed, never empty
    pub text: String,
}

/// An immutable document prepared for comparison
#[derive(Debug, Clone)]
pub struct Document {
    chunks: Vec<Chunk>,
    raw_text: String,
}

impl Document {
    /// Build a document from extracted paragraphs
    ///
    /// Paragraph order is preserved; chunk indices are assigned 0..k in that
    /// order. The raw text is the blank-line concatenation of all paragraphs.
    pub fn from_paragraphs(paragraphs: Vec<String>) -> Self {
        let raw_text = paragraphs.join("\n\n");
        let chunks = paragraphs
            .into_iter()
            .enumerate()
            .map(|(index, text)| Chunk { index, text })
            .collect();
        Document { chunks, raw_text }
    }

    /// Build a document by chunking raw text into paragraphs
    pub fn from_raw_text(raw: &str, min_chunk_chars: usize) -> Self {
        let paragraphs = split_paragraphs(raw, min_chunk_chars);
        let mut doc = Self::from_paragraphs(paragraphs);
        // Keep the original text for the global vector rather than the
        // join of the surviving chunks.
        doc.raw_text = raw.to_string();
        doc
    }

    /// The document's chunks in source order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Number of chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Full raw text, used for the global vector
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// Split raw text into paragraph chunks
///
/// Splits on blank lines first; if that yields five or fewer pieces the text
/// likely uses single newlines as paragraph breaks, so it is re-split on
/// single newlines. Pieces are trimmed and kept only when at least
/// `min_chunk_chars` characters long.
pub fn split_paragraphs(raw: &str, min_chunk_chars: usize) -> Vec<String> {
    let mut pieces: Vec<&str> = raw.split("\n\n").collect();
    if pieces.len() <= 5 {
        pieces = raw.split('\n').collect();
    }

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| p.chars().count() >= min_chunk_chars)
        .map(|p| p.to_string())
        .collect()
}
