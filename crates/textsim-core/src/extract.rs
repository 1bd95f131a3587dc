//! Text extraction collaborator
//!
//! The engine consumes documents as ordered paragraph sequences; producing
//! them from file bytes is the extractor's job. The trait is the seam where
//! richer format support (PDF, DOCX) plugs in; this crate ships a plain-text
//! implementation.

use std::path::Path;

use mime_guess::mime;

use crate::document::split_paragraphs;
use crate::error::{Result, TextsimError};

/// Extension list reported in unsupported-format errors
const SUPPORTED_EXTENSIONS: &str = "txt, text, md, markdown";

/// Turns raw file bytes into an ordered sequence of non-empty paragraphs
pub trait TextExtractor {
    /// Extract paragraphs from file bytes
    ///
    /// `extension` is the lowercase file extension without the dot. Fails
    /// with `UnsupportedFormat` for unrecognized extensions and
    /// `CorruptFile` for content that cannot be decoded.
    fn extract(&self, bytes: &[u8], extension: &str) -> Result<Vec<String>>;

    /// Read and extract a file from disk
    fn extract_path(&self, path: &Path) -> Result<Vec<String>> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| {
                TextsimError::unsupported_format("(none)", SUPPORTED_EXTENSIONS)
            })?;
        let bytes = std::fs::read(path)?;
        self.extract(&bytes, &extension)
            .map_err(|e| match e {
                TextsimError::CorruptFile { reason, .. } => {
                    TextsimError::corrupt_file(path.display().to_string(), reason)
                }
                other => other,
            })
    }
}

/// Extractor for plain-text and markdown files
#[derive(Debug, Clone, Copy)]
pub struct PlainTextExtractor {
    min_chunk_chars: usize,
}

impl PlainTextExtractor {
    /// Create an extractor keeping paragraphs of at least `min_chunk_chars`
    pub fn new(min_chunk_chars: usize) -> Self {
        PlainTextExtractor { min_chunk_chars }
    }

    fn decode(&self, bytes: &[u8]) -> std::result::Result<String, String> {
        // NUL bytes mean binary content, not a text encoding issue.
        if bytes.contains(&0) {
            return Err("binary content in text file".to_string());
        }

        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_string()),
            // Not UTF-8: decode as Latin-1, which accepts any byte sequence.
            Err(_) => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8], extension: &str) -> Result<Vec<String>> {
        let mime_type = mime_guess::from_ext(extension).first().ok_or_else(|| {
            TextsimError::unsupported_format(extension, SUPPORTED_EXTENSIONS)
        })?;

        let is_plain_text = mime_type.type_() == mime::TEXT
            && (mime_type.subtype() == mime::PLAIN || mime_type.subtype() == "markdown");
        if !is_plain_text {
            return Err(TextsimError::unsupported_format(
                extension,
                SUPPORTED_EXTENSIONS,
            ));
        }

        let raw = self
            .decode(bytes)
            .map_err(|reason| TextsimError::corrupt_file(format!("{} input", extension), reason))?;

        tracing::debug!(
            extension,
            mime = %mime_type,
            bytes = bytes.len(),
            "extracted text"
        );

        Ok(split_paragraphs(&raw, self.min_chunk_chars))
    }
}
