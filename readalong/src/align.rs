//! Align subcommand - match a timed transcript onto document text.

use crate::inputs::InputArgs;
use eyre::{Result, WrapErr};
use readalong_core::align::{Aligner, DEFAULT_MIN_SIMILARITY};
use std::io::Write;
use std::path::PathBuf;

/// CLI arguments for alignment.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output path for aligned words as newline-delimited JSON
    /// (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minimum similarity score for a token to match, in 0.0..=1.0
    #[arg(long, default_value_t = DEFAULT_MIN_SIMILARITY)]
    pub min_similarity: f64,
}

/// Resolved configuration for alignment.
#[derive(Debug)]
pub struct Config {
    pub inputs: InputArgs,
    pub output: Option<PathBuf>,
    pub aligner: Aligner,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let aligner = Aligner::new(args.min_similarity)
            .wrap_err("invalid similarity threshold")?;

        Ok(Self {
            inputs: args.inputs,
            output: args.output,
            aligner,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let (transcript, document) = config.inputs.load()?;

    let alignment = config.aligner.align(&transcript.words, &document);

    tracing::info!(
        matched = alignment.len(),
        total = alignment.input_count,
        "alignment finished"
    );

    if alignment.is_partial() {
        tracing::warn!(
            unmatched = alignment.input_count - alignment.len(),
            "partial alignment: some transcript words found no token"
        );
    }

    let mut lines = String::new();
    for word in &alignment.words {
        lines.push_str(&serde_json::to_string(word)?);
        lines.push('\n');
    }

    match &config.output {
        Some(path) => std::fs::write(path, lines)
            .wrap_err_with(|| format!("failed to write output: {:?}", path.display()))?,
        None => std::io::stdout().write_all(lines.as_bytes())?,
    }

    Ok(())
}
