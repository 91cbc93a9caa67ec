//! Follow subcommand - replay the highlight track on a simulated clock.
//!
//! Runs the same event sequence a rendering host would: align once, then
//! feed listen ticks at the configured interval and print every highlight
//! span change, with merges and scroll signals applied.

use crate::inputs::InputArgs;
use eyre::Result;
use readalong_core::align::{Aligner, Alignment};
use readalong_core::document::{DocumentText, RenderProgress, TokenSource};
use readalong_core::highlight::{
    DEFAULT_MAX_DELAY_BETWEEN_WORDS_MS, ScrollTracker, Segment, render_line,
};
use readalong_core::session::{PlaybackTransport, Session};
use readalong_core::tracker::{DEFAULT_LISTEN_INTERVAL_MS, TrackerConfig};
use readalong_core::types::TimedWord;

/// Slowest allowed playback speed; also the adjustment step.
pub const SPEED_STEP: f64 = 0.25;

/// Fastest allowed playback speed multiplier.
pub const MAX_SPEED: f64 = 2.0;

/// CLI arguments for highlight replay.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Listen tick interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_LISTEN_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Playback speed multiplier (clamped to 0.25..=2.0)
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Resolve every tick with a full scan so no word is skipped
    #[arg(long)]
    pub all_words: bool,

    /// Maximum onset gap in milliseconds for two words to share a highlight
    #[arg(long, default_value_t = DEFAULT_MAX_DELAY_BETWEEN_WORDS_MS)]
    pub max_delay_ms: u64,
}

/// Resolved configuration for highlight replay.
#[derive(Debug)]
pub struct Config {
    pub inputs: InputArgs,
    pub interval_ms: u64,
    pub speed: f64,
    pub max_delay_ms: u64,
    pub tracker: TrackerConfig,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let speed = clamp_speed(args.speed);
        if speed != args.speed {
            tracing::warn!(requested = args.speed, clamped = speed, "playback speed clamped");
        }

        let tracker = TrackerConfig {
            all_words_highlight: args.all_words,
            ..TrackerConfig::default()
        };
        tracker.validate()?;

        Ok(Self {
            inputs: args.inputs,
            interval_ms: args.interval_ms.max(1),
            speed,
            max_delay_ms: args.max_delay_ms,
            tracker,
        })
    }
}

/// Clamp a speed multiplier to the supported bounds.
pub fn clamp_speed(speed: f64) -> f64 {
    speed.clamp(SPEED_STEP, MAX_SPEED)
}

/// Transport backed by a manually advanced clock.
struct SimulatedPlayer {
    time_ms: u64,
    rate: f64,
}

impl PlaybackTransport for SimulatedPlayer {
    fn current_time_ms(&self) -> Option<u64> {
        Some(self.time_ms)
    }

    fn seek_ms(&mut self, time_ms: u64) {
        self.time_ms = time_ms;
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }
}

pub fn execute(config: Config) -> Result<()> {
    let (transcript, document) = config.inputs.load()?;

    let mut session = Session::new(config.tracker);
    let generation = session.begin_inputs();

    let Some(alignment) = align_when_rendered(&transcript.words, &document) else {
        tracing::warn!("document has no pages; nothing to follow");
        return Ok(());
    };
    session.install(alignment, generation);

    if session.alignment().is_empty() {
        tracing::warn!("nothing aligned; nothing to follow");
        return Ok(());
    }

    let end_ms = session
        .alignment()
        .words
        .last()
        .map(|word| word.time_ms + config.interval_ms)
        .unwrap_or(0);

    let mut player = SimulatedPlayer {
        time_ms: 0,
        rate: config.speed,
    };
    let mut scroll = ScrollTracker::default();
    let mut last_printed = None;

    session.on_play(&player);

    while player.time_ms <= end_ms {
        session.on_listen(&player);

        if session.current_index() != last_printed
            && let Some(index) = session.current_index()
        {
            last_printed = Some(index);
            print_highlight(&session, &document, index, &player, config.max_delay_ms, &mut scroll);
        }

        // media time advances faster than wall time at higher speeds
        player.time_ms += (config.interval_ms as f64 * config.speed).round() as u64;
    }

    Ok(())
}

/// Replay the host's page-rendered events and align on the completion
/// signal. Pages "render" instantly here; the gate is the same one a
/// rendering host uses while pages arrive incrementally. Returns `None`
/// for a pageless document.
fn align_when_rendered(words: &[TimedWord], document: &DocumentText) -> Option<Alignment> {
    let mut progress = RenderProgress::new(document.page_count());
    let mut alignment = None;

    for _ in 0..document.page_count() {
        if progress.page_rendered() {
            alignment = Some(Aligner::default().align(words, document));
        }
    }

    alignment
}

/// Print one highlight change: timestamp, scroll signal, and the line with
/// the highlight span marked.
fn print_highlight(
    session: &Session,
    document: &DocumentText,
    index: usize,
    player: &SimulatedPlayer,
    max_delay_ms: u64,
    scroll: &mut ScrollTracker,
) {
    let word = &session.alignment().words[index];
    let position = word.position;

    if let Some((page, line)) = scroll.update(position) {
        println!("-- scroll to page {page}, line {line}");
    }

    let segments = render_line(
        document.line(position.page, position.line),
        position.page,
        position.line,
        session.alignment(),
        Some(index),
        player.playback_rate(),
        max_delay_ms,
    );

    let rendered: Vec<String> = segments
        .iter()
        .map(|segment| match segment {
            Segment::Highlight(text) => format!("[{text}]"),
            Segment::Seek { text, .. } => (*text).to_string(),
            Segment::Inert(text) => (*text).to_string(),
        })
        .collect();

    println!("{:>8.2}s  {}", word.time_ms as f64 / 1000.0, rendered.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_speed_to_bounds() {
        assert_eq!(clamp_speed(0.0), SPEED_STEP);
        assert_eq!(clamp_speed(1.0), 1.0);
        assert_eq!(clamp_speed(9.0), MAX_SPEED);
    }

    #[test]
    fn alignment_waits_for_the_last_rendered_page() {
        let doc = DocumentText::from_plain_text("one two\u{000C}three");
        let words = [
            TimedWord::new("one", 0),
            TimedWord::new("two", 300),
            TimedWord::new("three", 600),
        ];

        let alignment = align_when_rendered(&words, &doc);
        assert_eq!(alignment.map(|a| a.len()), Some(3));
    }

    #[test]
    fn pageless_document_never_aligns() {
        let doc = DocumentText::default();
        assert!(align_when_rendered(&[], &doc).is_none());
    }
}
