//! readalong-core: transcript alignment and playback synchronization engine.
//!
//! Synchronizes a pre-timed word transcript with text extracted from a
//! rendered document and with an audio playback clock, so the word being
//! spoken can be highlighted as audio plays and clicking a word seeks
//! playback to its timestamp.
//!
//! # Architecture
//!
//! Two components run in strict dependency order:
//!
//! - [`align::Aligner`]: one-shot forward-only fuzzy matcher mapping timed
//!   transcript words onto the document's page/line/word token stream.
//! - [`tracker`]: per-tick resolution of the current word against the
//!   playback clock, with reset and O(1) advance strategies.
//!
//! The aligner's output is immutable input to the tracker; [`highlight`]
//! derives merged highlight spans and render segments from the tracker's
//! resolved index. [`session::Session`] wires transport events to both.
//!
//! # Quick Start
//!
//! ```
//! use readalong_core::align::Aligner;
//! use readalong_core::document::DocumentText;
//! use readalong_core::tracker::{ResolveMode, TrackerConfig, resolve};
//! use readalong_core::types::TimedWord;
//!
//! let doc = DocumentText::from_plain_text("Once upon a time");
//! let transcript = vec![
//!     TimedWord::new("once", 0),
//!     TimedWord::new("upon", 420),
//!     TimedWord::new("time", 1180),
//! ];
//!
//! let alignment = Aligner::default().align(&transcript, &doc);
//! assert_eq!(alignment.len(), 3);
//!
//! let config = TrackerConfig::default();
//! let current = resolve(&config, 450, &alignment.words, None, ResolveMode::Reset);
//! assert_eq!(current, Some(1));
//! ```

pub mod align;
pub mod document;
pub mod error;
pub mod highlight;
pub mod normalize;
pub mod session;
pub mod similarity;
pub mod tracker;
pub mod transcript;
pub mod types;
