//! Simulated seekable media deck for the terminal harness.
//!
//! Mimics the lifecycle of a real playback element: it starts without
//! metadata, becomes seekable once the simulated load completes, accepts
//! rate-limited position writes, and records everything so the UI can show
//! what the engine did to it.  Flaky mode refuses every seek — useful for
//! watching the engine shrug off a misbehaving backend.

use tracing::debug;

use crate::engine::actuator::{MediaError, MediaSink};

/// Load lifecycle of the simulated deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Metadata not yet available; every operation is refused.
    #[default]
    Loading,
    /// Metadata known; seeks accepted.
    Ready,
}

/// A stand-in for an externally owned media element.
#[derive(Debug)]
pub struct SimMedia {
    state: LoadState,
    /// Duration the deck reports once loaded, seconds.
    duration: f64,
    position: f64,
    muted: bool,
    inline: bool,
    preload_eager: bool,
    playing: bool,
    /// Refuse every seek (misbehaving-backend mode).
    flaky: bool,
    /// Refuse playback starts (autoplay-blocked mode).
    block_autoplay: bool,
    /// Accepted position writes.
    seeks_applied: u64,
    /// Refused seeks, including those refused while loading.
    seeks_rejected: u64,
}

impl SimMedia {
    pub fn new(duration: f64, flaky: bool, block_autoplay: bool) -> Self {
        Self {
            state: LoadState::Loading,
            duration,
            position: 0.0,
            muted: false,
            inline: false,
            preload_eager: false,
            playing: false,
            flaky,
            block_autoplay,
            seeks_applied: 0,
            seeks_rejected: 0,
        }
    }

    /// Complete the simulated load: metadata becomes queryable and seeks
    /// start being accepted.
    pub fn finish_loading(&mut self) {
        if self.state == LoadState::Loading {
            self.state = LoadState::Ready;
            debug!(duration = self.duration, "simulated media loaded");
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True once the warm-up hints (mute, inline, eager preload) are set.
    pub fn is_warmed(&self) -> bool {
        self.muted && self.inline && self.preload_eager
    }

    pub fn is_flaky(&self) -> bool {
        self.flaky
    }

    pub fn seeks_applied(&self) -> u64 {
        self.seeks_applied
    }

    pub fn seeks_rejected(&self) -> u64 {
        self.seeks_rejected
    }
}

impl MediaSink for SimMedia {
    fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    fn duration(&self) -> Option<f64> {
        (self.state == LoadState::Ready).then_some(self.duration)
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn seek(&mut self, secs: f64) -> Result<(), MediaError> {
        if self.state != LoadState::Ready {
            self.seeks_rejected += 1;
            return Err(MediaError::NotReady);
        }
        if self.flaky {
            self.seeks_rejected += 1;
            return Err(MediaError::NotReady);
        }
        if !secs.is_finite() || secs < 0.0 || secs >= self.duration {
            self.seeks_rejected += 1;
            return Err(MediaError::OutOfRange(secs));
        }
        self.position = secs;
        self.seeks_applied += 1;
        Ok(())
    }

    fn set_warm_hints(&mut self) {
        self.muted = true;
        self.inline = true;
        self.preload_eager = true;
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if self.state != LoadState::Ready || self.block_autoplay {
            return Err(MediaError::PlaybackRefused);
        }
        self.playing = true;
        Ok(())
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeks_are_refused_until_the_load_completes() {
        let mut deck = SimMedia::new(18.0, false, false);
        assert!(!deck.is_ready());
        assert!(deck.duration().is_none());
        assert!(deck.seek(3.0).is_err());
        assert_eq!(deck.seeks_rejected(), 1);

        deck.finish_loading();
        assert!(deck.is_ready());
        assert_eq!(deck.duration(), Some(18.0));
        assert!(deck.seek(3.0).is_ok());
        assert_eq!(deck.position(), 3.0);
        assert_eq!(deck.seeks_applied(), 1);
    }

    #[test]
    fn out_of_range_positions_are_refused() {
        let mut deck = SimMedia::new(18.0, false, false);
        deck.finish_loading();
        assert!(matches!(deck.seek(18.0), Err(MediaError::OutOfRange(_))));
        assert!(matches!(deck.seek(-0.1), Err(MediaError::OutOfRange(_))));
        assert!(matches!(deck.seek(f64::NAN), Err(MediaError::OutOfRange(_))));
        assert_eq!(deck.position(), 0.0);
    }

    #[test]
    fn flaky_mode_refuses_everything_but_keeps_counting() {
        let mut deck = SimMedia::new(18.0, true, false);
        deck.finish_loading();
        for _ in 0..5 {
            assert!(deck.seek(1.0).is_err());
        }
        assert_eq!(deck.seeks_rejected(), 5);
        assert_eq!(deck.seeks_applied(), 0);
    }

    #[test]
    fn blocked_autoplay_refuses_play_but_not_hints() {
        let mut deck = SimMedia::new(18.0, false, true);
        deck.finish_loading();
        deck.set_warm_hints();
        assert!(deck.is_warmed());
        assert!(matches!(deck.play(), Err(MediaError::PlaybackRefused)));
        assert!(!deck.is_playing());
        // Hints and seeking still work.
        assert!(deck.seek(2.0).is_ok());
    }
}
