//! Shared input arguments: transcript and document paths.

use eyre::{Result, WrapErr};
use readalong_core::document::DocumentText;
use readalong_core::transcript::Transcript;
use std::path::PathBuf;

/// Input file pair shared by all subcommands.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Path to the timed transcript (newline-delimited JSON records)
    pub transcript: PathBuf,

    /// Path to the document text (form feed separates pages)
    pub document: PathBuf,
}

impl InputArgs {
    /// Load both inputs from disk.
    pub fn load(&self) -> Result<(Transcript, DocumentText)> {
        let transcript = Transcript::from_file(&self.transcript)
            .wrap_err_with(|| format!("failed to load transcript: {:?}", self.transcript.display()))?;

        if transcript.skipped > 0 {
            tracing::warn!(skipped = transcript.skipped, "transcript had malformed records");
        }

        let text = std::fs::read_to_string(&self.document)
            .wrap_err_with(|| format!("failed to read document: {:?}", self.document.display()))?;

        Ok((transcript, DocumentText::from_plain_text(&text)))
    }
}
