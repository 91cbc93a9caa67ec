//! Current-word resolution against the playback clock.
//!
//! Two strategies: a full scan from the start of the aligned list (Reset,
//! used after discontinuities) and an O(1) window check against the previous
//! index (Advance, used on steady listen ticks). Resolution is a pure
//! function of (clock, aligned words, prior index, mode) so it can be tested
//! without a player.

use crate::error::ConfigError;
use crate::types::AlignedWord;

/// Default early-highlight tolerance in milliseconds: a word may light up
/// this far before its exact timestamp to mask rendering/audio latency.
pub const DEFAULT_WORD_THRESHOLD_MS: u64 = 30;

/// Default maximum forward skip in words for advance mode.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Default listen-tick interval in milliseconds.
pub const DEFAULT_LISTEN_INTERVAL_MS: u64 = 50;

/// Tracker tuning knobs.
#[derive(Clone, Copy, Debug)]
pub struct TrackerConfig {
    /// Early-highlight tolerance in milliseconds (default 30)
    pub word_threshold_ms: u64,
    /// Maximum forward skip in words before catching up (default 2)
    pub max_distance: usize,
    /// Resolve every listen tick in reset mode so no word is ever skipped,
    /// at the cost of an O(n) scan per tick (default off)
    pub all_words_highlight: bool,
    /// Whether an explicit pause forces a reset resolution; observed player
    /// integrations differ, so it is a knob rather than a fixed rule
    pub reset_on_pause: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            word_threshold_ms: DEFAULT_WORD_THRESHOLD_MS,
            max_distance: DEFAULT_MAX_DISTANCE,
            all_words_highlight: false,
            reset_on_pause: true,
        }
    }
}

impl TrackerConfig {
    /// Check the knobs are usable before driving resolution with them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_distance < 1 {
            return Err(ConfigError::InvalidMaxDistance(self.max_distance));
        }

        Ok(())
    }

    /// Resolution strategy for a steady listen tick.
    pub fn listen_mode(&self) -> ResolveMode {
        if self.all_words_highlight {
            ResolveMode::Reset
        } else {
            ResolveMode::Advance
        }
    }
}

/// Resolution strategy for one invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveMode {
    /// Full linear scan from the start; used on seek, pause, rewind, and
    /// whenever the advance window is not fully available
    Reset,
    /// Check only `prior + 1` and `prior + max_distance`
    Advance,
}

/// Resolve the current-word index for a playback clock reading.
///
/// `prior` is the previously resolved index, or `None` before the first
/// resolution. Returns the new index, which is `None` only when no word has
/// started yet. Never panics on an empty or short list; when the advance
/// window would run past the end of the list the call falls back to a reset
/// scan instead of indexing out of bounds.
pub fn resolve(
    config: &TrackerConfig,
    time_ms: u64,
    words: &[AlignedWord],
    prior: Option<usize>,
    mode: ResolveMode,
) -> Option<usize> {
    if words.is_empty() {
        return prior;
    }

    let distance = config.max_distance.max(1);
    let advance_window = match prior {
        // Advance needs both candidates inside the list
        Some(index) if index + distance < words.len() => Some(index),
        _ => None,
    };

    match (mode, advance_window) {
        (ResolveMode::Advance, Some(index)) => advance(config, time_ms, words, index),
        _ => reset(config, time_ms, words),
    }
}

/// Full scan: select the last word whose `time - threshold` has already
/// elapsed. Before the first word's window opens nothing qualifies and the
/// index goes unset, even when a prior index exists (a seek back before the
/// first word must clear the highlight); after the last word's window opens
/// the scan sticks at the last entry.
fn reset(config: &TrackerConfig, time_ms: u64, words: &[AlignedWord]) -> Option<usize> {
    let mut current = None;

    for (index, word) in words.iter().enumerate() {
        if word.time_ms.saturating_sub(config.word_threshold_ms) > time_ms {
            break;
        }
        current = Some(index);
    }

    current
}

/// Window check: jump by `max_distance` when playback has outrun that word's
/// exact time, advance by one when the next word's threshold has elapsed,
/// otherwise stay.
fn advance(
    config: &TrackerConfig,
    time_ms: u64,
    words: &[AlignedWord],
    prior: usize,
) -> Option<usize> {
    let skip_to = prior + config.max_distance.max(1);

    if words[skip_to].time_ms <= time_ms {
        return Some(skip_to);
    }

    if words[prior + 1].time_ms.saturating_sub(config.word_threshold_ms) <= time_ms {
        return Some(prior + 1);
    }

    Some(prior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlignedWord, Position};

    fn word_list(times: &[u64]) -> Vec<AlignedWord> {
        times
            .iter()
            .enumerate()
            .map(|(i, &time_ms)| AlignedWord {
                time_ms,
                display_value: format!("w{i}"),
                position: Position::new(0, 0, i),
            })
            .collect()
    }

    fn config() -> TrackerConfig {
        TrackerConfig::default()
    }

    #[test]
    fn empty_list_is_a_no_op() {
        assert_eq!(resolve(&config(), 500, &[], None, ResolveMode::Reset), None);
        assert_eq!(
            resolve(&config(), 500, &[], Some(3), ResolveMode::Advance),
            Some(3)
        );
    }

    #[test]
    fn reset_threshold_boundary() {
        let words = word_list(&[0, 100, 200, 300, 400]);

        // Word at 100 lights up from 100 - 30 = 70ms on
        assert_eq!(
            resolve(&config(), 69, &words, None, ResolveMode::Reset),
            Some(0)
        );
        assert_eq!(
            resolve(&config(), 70, &words, None, ResolveMode::Reset),
            Some(1)
        );
    }

    #[test]
    fn reset_before_playback_starts_is_unset() {
        let words = word_list(&[500, 900, 1300]);

        assert_eq!(resolve(&config(), 0, &words, None, ResolveMode::Reset), None);
        // the first word's window opens at 470
        assert_eq!(
            resolve(&config(), 470, &words, None, ResolveMode::Reset),
            Some(0)
        );
    }

    #[test]
    fn reset_past_the_end_sticks_at_last_entry() {
        let words = word_list(&[0, 100, 200]);

        assert_eq!(
            resolve(&config(), 10_000, &words, Some(2), ResolveMode::Reset),
            Some(2)
        );
        assert_eq!(
            resolve(&config(), 10_000, &words, None, ResolveMode::Reset),
            Some(2)
        );
    }

    #[test]
    fn advance_skips_to_max_distance_when_outrun() {
        let words = word_list(&[0, 100, 200, 300, 400]);

        // time 350: words[0+2].time = 200 has elapsed, jump straight to 2
        assert_eq!(
            resolve(&config(), 350, &words, Some(0), ResolveMode::Advance),
            Some(2)
        );
    }

    #[test]
    fn advance_steps_by_one_within_threshold() {
        let words = word_list(&[0, 100, 200, 300, 400]);

        // 100 - 30 = 70 elapsed, but 200 has not
        assert_eq!(
            resolve(&config(), 70, &words, Some(0), ResolveMode::Advance),
            Some(1)
        );
        // one ms early: hold
        assert_eq!(
            resolve(&config(), 69, &words, Some(0), ResolveMode::Advance),
            Some(0)
        );
    }

    #[test]
    fn advance_without_a_full_window_falls_back_to_reset() {
        let words = word_list(&[0, 100, 200]);

        // prior=1: 1 + 2 is out of bounds, must not index past the end
        assert_eq!(
            resolve(&config(), 500, &words, Some(1), ResolveMode::Advance),
            Some(2)
        );
    }

    #[test]
    fn advance_with_unset_prior_falls_back_to_reset() {
        let words = word_list(&[0, 100, 200, 300]);

        // windows open at 0, 70, 170, 270; at 250ms the current word is 2
        assert_eq!(
            resolve(&config(), 250, &words, None, ResolveMode::Advance),
            Some(2)
        );
    }

    #[test]
    fn seek_before_first_window_clears_the_index() {
        let words = word_list(&[5000, 5400, 5800]);

        // steady playback reached the last word; a seek back to 0 must not
        // leave it highlighted while the first window is still closed
        assert_eq!(
            resolve(&config(), 0, &words, Some(2), ResolveMode::Reset),
            None
        );
        assert_eq!(
            resolve(&config(), 4970, &words, Some(2), ResolveMode::Reset),
            Some(0)
        );
    }

    #[test]
    fn seek_backward_resolves_with_reset() {
        let words = word_list(&[0, 100, 200, 300, 400]);

        // steady progress reached index 4; a seek back to 120ms re-scans
        assert_eq!(
            resolve(&config(), 120, &words, Some(4), ResolveMode::Reset),
            Some(1)
        );
    }

    #[test]
    fn zero_max_distance_fails_validation() {
        let cfg = TrackerConfig {
            max_distance: 0,
            ..TrackerConfig::default()
        };

        assert!(cfg.validate().is_err());
        assert!(config().validate().is_ok());
    }

    #[test]
    fn all_words_highlight_selects_reset_each_tick() {
        let cfg = TrackerConfig {
            all_words_highlight: true,
            ..TrackerConfig::default()
        };

        assert_eq!(cfg.listen_mode(), ResolveMode::Reset);
        assert_eq!(config().listen_mode(), ResolveMode::Advance);
    }
}
