//! Analysis configuration for textsim
//!
//! Defaults match the reference behavior of the comparison engine and can be
//! overridden from a TOML file passed via `--config`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextsimError};
use crate::vector::Weighting;

/// Tuning knobs for document analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// N-gram order used for vectorization
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,

    /// Number of most-similar chunk pairs to report
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Minimum character length for a paragraph to count as a chunk
    #[serde(default = "default_min_chunk_chars")]
    pub min_chunk_chars: usize,

    /// Maximum character length of a match snippet
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,

    /// Ceiling on chunk pairs per comparison; larger comparisons are rejected
    #[serde(default = "default_max_chunk_pairs")]
    pub max_chunk_pairs: usize,

    /// Fold common Latin diacritics during normalization (é -> e)
    #[serde(default = "default_fold_diacritics")]
    pub fold_diacritics: bool,

    /// Term weighting for document comparison
    #[serde(default)]
    pub weighting: Weighting,
}

fn default_ngram_size() -> usize {
    2
}

fn default_top_n() -> usize {
    3
}

fn default_min_chunk_chars() -> usize {
    30
}

fn default_snippet_chars() -> usize {
    240
}

fn default_max_chunk_pairs() -> usize {
    250_000
}

fn default_fold_diacritics() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            ngram_size: default_ngram_size(),
            top_n: default_top_n(),
            min_chunk_chars: default_min_chunk_chars(),
            snippet_chars: default_snippet_chars(),
            max_chunk_pairs: default_max_chunk_pairs(),
            fold_diacritics: default_fold_diacritics(),
            weighting: Weighting::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AnalysisConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TextsimError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.ngram_size, 2);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.min_chunk_chars, 30);
        assert_eq!(config.snippet_chars, 240);
        assert_eq!(config.max_chunk_pairs, 250_000);
        assert!(config.fold_diacritics);
        assert_eq!(config.weighting, Weighting::TfIdf);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AnalysisConfig {
            ngram_size: 3,
            top_n: 5,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = AnalysisConfig::load(&path).unwrap();
        assert_eq!(loaded.ngram_size, 3);
        assert_eq!(loaded.top_n, 5);
        assert_eq!(loaded.min_chunk_chars, 30);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "ngram_size = 1\nweighting = \"tf\"\n").unwrap();

        let loaded = AnalysisConfig::load(&path).unwrap();
        assert_eq!(loaded.ngram_size, 1);
        assert_eq!(loaded.weighting, Weighting::Tf);
        assert_eq!(loaded.top_n, 3);
        assert!(loaded.fold_diacritics);
    }
}
