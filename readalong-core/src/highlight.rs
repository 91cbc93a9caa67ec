//! Highlight-span derivation for the rendering host.
//!
//! Given the resolved current index, produces per-line render segments:
//! plain text, the highlighted span (possibly merged with a temporally
//! adjacent neighbor), and clickable seek targets. Also derives the
//! scroll-to-position signal.

use crate::align::Alignment;
use crate::types::Position;

/// Default maximum gap in milliseconds between two words for them to share
/// one highlight span, at 1.0x playback speed.
pub const DEFAULT_MAX_DELAY_BETWEEN_WORDS_MS: u64 = 200;

/// Which neighbor, if any, joins the current word's highlight span.
///
/// Forward merge takes precedence when both neighbors are close enough: it
/// suppresses a not-yet-rendered word instead of retracting an already
/// rendered one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeDirection {
    None,
    /// The next word joins the span and its own render step is suppressed
    Forward,
    /// The previous word joins the span and its standalone render is retracted
    Backward,
}

/// Decide whether the current word merges with a neighbor.
///
/// Two words merge only when their onset gap is strictly below the
/// configured delay scaled by the playback-rate multiplier, and the neighbor
/// aligned word occupies the adjacent token on the same line. The adjacency
/// requirement keeps a merge from spanning a line break or an unaligned
/// token sitting between the two words.
pub fn merge_direction(
    alignment: &Alignment,
    index: usize,
    playback_rate: f64,
    max_delay_ms: u64,
) -> MergeDirection {
    let Some(current) = alignment.words.get(index) else {
        return MergeDirection::None;
    };

    let scaled = playback_rate * max_delay_ms as f64;
    let position = current.position;

    if let Some(next) = alignment.words.get(index + 1)
        && next.position == Position::new(position.page, position.line, position.word + 1)
        && ((next.time_ms - current.time_ms) as f64) < scaled
    {
        return MergeDirection::Forward;
    }

    if position.word > 0
        && index > 0
        && let Some(prev) = alignment.words.get(index - 1)
        && prev.position == Position::new(position.page, position.line, position.word - 1)
        && ((current.time_ms - prev.time_ms) as f64) < scaled
    {
        return MergeDirection::Backward;
    }

    MergeDirection::None
}

/// One renderable piece of a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// The current highlight span (one word, or two merged words)
    Highlight(String),
    /// A token mapped to an aligned word; clicking it seeks to `time_ms`
    Seek { text: &'a str, time_ms: u64 },
    /// A token with no aligned word; clickable area present, no seek emitted
    Inert(&'a str),
}

/// Produce the ordered render segments for one line of tokens.
///
/// `current` is the resolved current-word index. A forward merge folds the
/// next token into the highlight and suppresses it; a backward merge folds
/// the previous token in and retracts its already-emitted segment. Merges
/// only ever involve the adjacent token, so the suppressed or retracted
/// segment is always the merged word's own.
pub fn render_line<'a>(
    tokens: &'a [String],
    page: usize,
    line: usize,
    alignment: &Alignment,
    current: Option<usize>,
    playback_rate: f64,
    max_delay_ms: u64,
) -> Vec<Segment<'a>> {
    let mut segments = Vec::with_capacity(tokens.len());
    let mut suppress_next = false;

    for (word, token) in tokens.iter().enumerate() {
        if suppress_next {
            suppress_next = false;
            continue;
        }

        match alignment.index_at(Position::new(page, line, word)) {
            Some(index) if Some(index) == current => {
                let item = &alignment.words[index];

                match merge_direction(alignment, index, playback_rate, max_delay_ms) {
                    MergeDirection::Forward => {
                        let next = &alignment.words[index + 1];
                        segments.push(Segment::Highlight(format!(
                            "{} {}",
                            item.display_value, next.display_value
                        )));
                        suppress_next = true;
                    }
                    MergeDirection::Backward => {
                        let prev = &alignment.words[index - 1];
                        segments.pop();
                        segments.push(Segment::Highlight(format!(
                            "{} {}",
                            prev.display_value, item.display_value
                        )));
                    }
                    MergeDirection::None => {
                        segments.push(Segment::Highlight(item.display_value.clone()));
                    }
                }
            }
            Some(index) => {
                segments.push(Segment::Seek {
                    text: token,
                    time_ms: alignment.words[index].time_ms,
                });
            }
            None => segments.push(Segment::Inert(token)),
        }
    }

    segments
}

/// Emits a scroll-to signal only when the current (page, line) changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last: Option<(usize, usize)>,
}

impl ScrollTracker {
    /// Feed the current word's position; returns the (page, line) to scroll
    /// to when it differs from the previous tick.
    pub fn update(&mut self, position: Position) -> Option<(usize, usize)> {
        let target = (position.page, position.line);

        if self.last == Some(target) {
            return None;
        }

        self.last = Some(target);
        Some(target)
    }
}
