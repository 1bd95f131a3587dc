//! `textsim short` command - quick short-text comparison

use crate::cli::{Cli, OutputFormat};
use textsim_core::analysis::Analyzer;
use textsim_core::config::AnalysisConfig;
use textsim_core::error::Result;

/// Execute the short command
pub fn execute(
    cli: &Cli,
    config: &AnalysisConfig,
    text_a: &str,
    text_b: &str,
    ngram_size: usize,
) -> Result<()> {
    let analyzer = Analyzer::new(config.clone());
    let result = analyzer.analyze_short_text(text_a, text_b, ngram_size)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            println!("Jaccard similarity: {:.4}", result.jaccard_similarity);
            println!("Cosine similarity:  {:.4}", result.cosine_similarity);
        }
    }

    Ok(())
}
