//! Command dispatch logic for textsim

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use textsim_core::config::AnalysisConfig;
use textsim_core::error::{Result, TextsimError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    if cli.verbose {
        eprintln!("load_config: {:?}", start.elapsed());
    }

    match &cli.command {
        None => Err(TextsimError::UsageError(
            "no command given (try: textsim compare <FILE_A> <FILE_B> or textsim short <TEXT_A> <TEXT_B>)"
                .to_string(),
        )),

        Some(Commands::Compare {
            file_a,
            file_b,
            n,
            top_n,
            weighting,
            min_chunk_chars,
        }) => {
            let mut config = config;
            if let Some(weighting) = weighting {
                config.weighting = *weighting;
            }
            if let Some(min_chunk_chars) = min_chunk_chars {
                config.min_chunk_chars = *min_chunk_chars;
            }
            commands::compare::execute(
                cli,
                &config,
                file_a,
                file_b,
                n.unwrap_or(config.ngram_size),
                top_n.unwrap_or(config.top_n),
                start,
            )
        }

        Some(Commands::Short { text_a, text_b, n }) => commands::short::execute(
            cli,
            &config,
            text_a,
            text_b,
            n.unwrap_or(config.ngram_size),
        ),
    }
}

fn load_config(cli: &Cli) -> Result<AnalysisConfig> {
    match &cli.config {
        Some(path) => AnalysisConfig::load(path),
        None => Ok(AnalysisConfig::default()),
    }
}
