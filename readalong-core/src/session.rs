//! Event-driven session glue between the engine and a playback host.
//!
//! The session owns the installed [`Alignment`] and the current-word index,
//! and translates transport events (play, pause, seek, end, listen ticks)
//! into tracker resolutions. Everything runs on the host's event loop; the
//! alignment is replaced wholesale so a render triggered mid-update never
//! observes a partially-built list.

use crate::align::Alignment;
use crate::tracker::{ResolveMode, TrackerConfig, resolve};
use crate::types::Position;
use std::sync::Arc;

/// Playback transport consumed by the session.
///
/// `current_time_ms` returns `None` while the transport is not ready; the
/// session skips resolution for that tick.
pub trait PlaybackTransport {
    fn current_time_ms(&self) -> Option<u64>;
    fn seek_ms(&mut self, time_ms: u64);
    fn playback_rate(&self) -> f64;
}

/// Read-along session state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    config: TrackerConfig,
    alignment: Arc<Alignment>,
    current: Option<usize>,
    generation: u64,
}

impl Session {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// The installed alignment (empty before the first install).
    pub fn alignment(&self) -> &Arc<Alignment> {
        &self.alignment
    }

    /// The currently highlighted word index, if resolved.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Identity of the current (transcript, token stream) input pair.
    ///
    /// Bump this when either input changes; an alignment built for an older
    /// generation is discarded on install.
    pub fn begin_inputs(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Install a freshly built alignment, resetting the current index.
    ///
    /// Returns false (and leaves state untouched) when the inputs were
    /// superseded while the alignment was being built.
    pub fn install(&mut self, alignment: Alignment, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "stale alignment discarded");
            return false;
        }

        tracing::info!(
            matched = alignment.len(),
            total = alignment.input_count,
            partial = alignment.is_partial(),
            "alignment installed"
        );

        self.alignment = Arc::new(alignment);
        self.current = None;
        true
    }

    /// Steady listen tick.
    pub fn on_listen<T: PlaybackTransport>(&mut self, transport: &T) {
        self.resolve_tick(transport, self.config.listen_mode());
    }

    pub fn on_play<T: PlaybackTransport>(&mut self, transport: &T) {
        self.resolve_tick(transport, ResolveMode::Reset);
    }

    pub fn on_pause<T: PlaybackTransport>(&mut self, transport: &T) {
        if self.config.reset_on_pause {
            self.resolve_tick(transport, ResolveMode::Reset);
        }
    }

    pub fn on_seeked<T: PlaybackTransport>(&mut self, transport: &T) {
        self.resolve_tick(transport, ResolveMode::Reset);
    }

    /// End of media: land on the last word.
    pub fn on_ended(&mut self) {
        if !self.alignment.is_empty() {
            self.current = Some(self.alignment.len() - 1);
        }
    }

    /// Click on a token: request a seek when it maps to an aligned word.
    /// Unmapped tokens are inert.
    pub fn click<T: PlaybackTransport>(&mut self, transport: &mut T, position: Position) {
        if let Some(index) = self.alignment.index_at(position)
            && let Some(time_ms) = self.alignment.time_at(index)
        {
            transport.seek_ms(time_ms);
        }
    }

    fn resolve_tick<T: PlaybackTransport>(&mut self, transport: &T, mode: ResolveMode) {
        // Transport not ready: skip this tick, no state change
        let Some(time_ms) = transport.current_time_ms() else {
            return;
        };

        self.current = resolve(&self.config, time_ms, &self.alignment.words, self.current, mode);
    }
}
