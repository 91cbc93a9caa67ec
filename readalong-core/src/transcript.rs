//! Timed transcript loading.
//!
//! Transcripts are newline-delimited JSON: one `{"time": <ms>, "value": <word>}`
//! record per line. A line that fails to parse is skipped with a diagnostic;
//! it does not abort the remainder of the load.

use crate::error::{Result, TranscriptError};
use crate::types::TimedWord;
use std::io::BufRead;
use std::path::Path;

/// A loaded transcript with its skip diagnostics.
#[derive(Clone, Debug)]
pub struct Transcript {
    /// Successfully parsed records, in file order
    pub words: Vec<TimedWord>,
    /// Number of lines that failed to parse and were dropped
    pub skipped: usize,
}

impl Transcript {
    /// Load a transcript from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Load a transcript from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::NoValidRecords`] when the input contains
    /// records but none of them parse. An empty input yields an empty
    /// transcript, not an error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        let mut skipped = 0;

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<TimedWord>(&line) {
                Ok(word) => words.push(word),
                Err(error) => {
                    tracing::warn!(line = number + 1, %error, "skipping malformed record");
                    skipped += 1;
                }
            }
        }

        if words.is_empty() && skipped > 0 {
            return Err(TranscriptError::NoValidRecords { skipped }.into());
        }

        Ok(Self { words, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_valid_records() {
        let input = "{\"time\": 0, \"value\": \"once\"}\n{\"time\": 480, \"value\": \"upon\"}\n";

        let transcript = Transcript::from_reader(input.as_bytes()).unwrap();

        assert_eq!(transcript.words.len(), 2);
        assert_eq!(transcript.skipped, 0);
        assert_eq!(transcript.words[0].value, "once");
        assert_eq!(transcript.words[1].time_ms, 480);
    }

    #[test]
    fn skips_malformed_lines_and_counts_them() {
        let input = "{\"time\": 0, \"value\": \"once\"}\nnot json\n{\"time\": 900, \"value\": \"a\"}\n";

        let transcript = Transcript::from_reader(input.as_bytes()).unwrap();

        assert_eq!(transcript.words.len(), 2);
        assert_eq!(transcript.skipped, 1);
    }

    #[test]
    fn ignores_blank_lines() {
        let input = "\n{\"time\": 0, \"value\": \"once\"}\n\n";

        let transcript = Transcript::from_reader(input.as_bytes()).unwrap();

        assert_eq!(transcript.words.len(), 1);
        assert_eq!(transcript.skipped, 0);
    }

    #[test]
    fn all_malformed_is_an_error() {
        let input = "garbage\nmore garbage\n";

        let result = Transcript::from_reader(input.as_bytes());

        assert!(result.is_err());
    }

    #[test]
    fn empty_input_is_empty_transcript() {
        let transcript = Transcript::from_reader("".as_bytes()).unwrap();

        assert!(transcript.words.is_empty());
        assert_eq!(transcript.skipped, 0);
    }
}
