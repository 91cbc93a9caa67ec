//! Forward-only fuzzy alignment of a timed transcript onto a token stream.
//!
//! A single pass walks both sequences in order: for each transcript word the
//! scan resumes from where the previous match left off and accepts the first
//! token scoring at or above the similarity threshold. Consumed tokens are
//! never revisited, so positions come out strictly increasing and each token
//! is matched at most once.

use crate::document::TokenSource;
use crate::error::{ConfigError, Result};
use crate::normalize::simplify;
use crate::similarity::dice_coefficient;
use crate::types::{AlignedWord, Position, TimedWord};

/// Default minimum similarity score for a token to be accepted as a match.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.8;

/// Forward-only scan cursor over the token stream.
///
/// Holds the position where the next search starts. It only ever moves
/// forward; out-of-order transcripts are unsupported and there is no retreat
/// operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cursor {
    page: usize,
    line: usize,
    word: usize,
}

impl Cursor {
    /// Advance past a consumed token so the next search starts strictly
    /// after it. A forward scan can only find positions at or beyond the
    /// cursor, so this never moves to an earlier page or line.
    fn consume(&mut self, position: Position) {
        self.page = position.page;
        self.line = position.line;
        self.word = position.word + 1;
    }
}

/// Transcript-to-document aligner.
#[derive(Clone, Copy, Debug)]
pub struct Aligner {
    /// Minimum similarity score in `[0, 1]` for a match (default 0.8)
    pub min_similarity: f64,
}

impl Default for Aligner {
    fn default() -> Self {
        Self {
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }
}

impl Aligner {
    /// Create an aligner with a custom similarity threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSimilarity`] when the threshold is
    /// outside `[0, 1]`.
    pub fn new(min_similarity: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&min_similarity) {
            return Err(ConfigError::InvalidSimilarity(min_similarity).into());
        }

        Ok(Self { min_similarity })
    }

    /// Align transcript words onto the token stream.
    ///
    /// Runs in one forward pass. A word that never reaches the similarity
    /// threshold in the remaining stream produces no [`AlignedWord`] and
    /// leaves the cursor untouched; the result reports the shortfall through
    /// [`Alignment::is_partial`].
    pub fn align<S: TokenSource>(&self, words: &[TimedWord], source: &S) -> Alignment {
        let mut aligned = Vec::with_capacity(words.len());
        let mut cursor = Cursor::default();

        for word in words {
            let wanted = simplify(&word.value);

            match self.find_forward(&wanted, source, cursor) {
                Some(position) => {
                    cursor.consume(position);
                    aligned.push(AlignedWord {
                        time_ms: word.time_ms,
                        display_value: source.line(position.page, position.line)[position.word]
                            .clone(),
                        position,
                    });
                }
                None => {
                    tracing::debug!(word = %word.value, time_ms = word.time_ms, "no match");
                }
            }
        }

        if aligned.len() < words.len() {
            tracing::warn!(
                matched = aligned.len(),
                total = words.len(),
                "partial alignment: some transcript words were not matched"
            );
        }

        Alignment {
            words: aligned,
            input_count: words.len(),
        }
    }

    /// Scan the stream from `cursor` and return the first position whose
    /// token scores at or above the threshold. Ties are impossible by
    /// construction: the earliest qualifying token in scan order wins.
    fn find_forward<S: TokenSource>(
        &self,
        wanted: &str,
        source: &S,
        cursor: Cursor,
    ) -> Option<Position> {
        for page in cursor.page..source.page_count() {
            let first_line = if page == cursor.page { cursor.line } else { 0 };

            for line in first_line..source.line_count(page) {
                // The saved word offset only applies to the exact line where
                // the previous match left off
                let first_word = if page == cursor.page && line == cursor.line {
                    cursor.word
                } else {
                    0
                };

                let tokens = source.line(page, line);
                for word in first_word..tokens.len() {
                    let score = dice_coefficient(wanted, &simplify(&tokens[word]));
                    if score >= self.min_similarity {
                        return Some(Position::new(page, line, word));
                    }
                }
            }
        }

        None
    }
}

/// The aligner's output: position-addressable aligned words plus the
/// diagnostic needed to report partial alignment.
///
/// Built once per (transcript, token stream) pair and installed wholesale;
/// consumers never observe a partially-built list.
#[derive(Clone, Debug, Default)]
pub struct Alignment {
    /// Aligned words in transcript order; positions strictly increasing
    pub words: Vec<AlignedWord>,
    /// Number of transcript words the aligner was given
    pub input_count: usize,
}

impl Alignment {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when at least one transcript word found no token.
    pub fn is_partial(&self) -> bool {
        self.words.len() < self.input_count
    }

    /// Find the aligned-word index occupying a token position, if any.
    ///
    /// Positions are strictly increasing in word order, so this is a binary
    /// search.
    pub fn index_at(&self, position: Position) -> Option<usize> {
        self.words
            .binary_search_by(|word| word.position.cmp(&position))
            .ok()
    }

    /// Time in milliseconds of the word at `index`.
    pub fn time_at(&self, index: usize) -> Option<u64> {
        self.words.get(index).map(|word| word.time_ms)
    }
}
