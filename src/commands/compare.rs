//! `textsim compare` command - whole-document comparison
//!
//! Extracts both files into paragraph chunks, computes the global cosine
//! score, the full chunk similarity matrix with its aggregate score, and the
//! top-N most similar chunk pairs.

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use textsim_core::analysis::{AnalysisResult, Analyzer};
use textsim_core::config::AnalysisConfig;
use textsim_core::document::Document;
use textsim_core::error::Result;
use textsim_core::extract::{PlainTextExtractor, TextExtractor};

/// Execute the compare command
pub fn execute(
    cli: &Cli,
    config: &AnalysisConfig,
    file_a: &Path,
    file_b: &Path,
    ngram_size: usize,
    top_n: usize,
    start: Instant,
) -> Result<()> {
    let extractor = PlainTextExtractor::new(config.min_chunk_chars);
    let doc_a = Document::from_paragraphs(extractor.extract_path(file_a)?);
    let doc_b = Document::from_paragraphs(extractor.extract_path(file_b)?);

    if cli.verbose {
        eprintln!("extract: {:?}", start.elapsed());
    }

    let analyzer = Analyzer::new(config.clone());
    let result = analyzer.analyze_documents(&doc_a, &doc_b, ngram_size, top_n)?;

    if cli.verbose {
        eprintln!("analyze: {:?}", start.elapsed());
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => print_human(cli, &result),
    }

    Ok(())
}

fn print_human(cli: &Cli, result: &AnalysisResult) {
    let (rows, cols) = result.matrix_shape;
    println!("Global similarity:  {:.4}", result.global_similarity_score);
    println!("Chunked similarity: {:.4}", result.chunked_similarity_score);
    println!("Matrix shape:       {} x {}", rows, cols);

    if result.most_similar_pairs.is_empty() {
        return;
    }

    println!("Most similar pairs:");
    for pair in &result.most_similar_pairs {
        println!(
            "  {}. {:.4}  A#{} <-> B#{}",
            pair.rank, pair.score, pair.doc_a_part_index, pair.doc_b_part_index
        );
        if !cli.quiet {
            println!("     A: {}", pair.doc_a_text_snippet);
            println!("     B: {}", pair.doc_b_text_snippet);
        }
    }
}
