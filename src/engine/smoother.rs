//! Temporal smoothing — the applied media time chases the target.
//!
//! Raw scroll events arrive far more often than a media backend can absorb
//! discrete seeks, and trackpad micro-jitter would make the picture flicker
//! between adjacent frames.  Instead of seeking per event, a periodic pass
//! closes a fixed fraction of the remaining gap each tick (first-order
//! exponential smoothing: O(1) state, monotonic convergence for a constant
//! target) and snaps once the gap falls below a threshold.  When input goes
//! quiet the loop suspends itself so a resting page costs nothing.

use std::time::Instant;

use crate::config::EngineConfig;

/// Whether the smoothing loop currently does per-tick work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    /// Suspended; ticks are no-ops.
    #[default]
    Idle,
    /// Input was seen recently; each tick advances the applied time.
    Batching,
}

/// What a single smoothing pass did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The loop is suspended; nothing moved.
    Asleep,
    /// Input has been quiet past the timeout; the loop suspended itself.
    WentIdle,
    /// Awake but gated (backend not ready); nothing moved.
    Held,
    /// Within snap distance; the applied time now equals the target.
    Snapped(f64),
    /// Closed part of the gap toward the target.
    Advanced(f64),
}

/// Two-state smoothing machine owning the target/current pair.
///
/// Deliberately knows nothing about scroll surfaces or media sinks — the
/// engine feeds it targets and ticks, and acts on the returned [`Step`].
#[derive(Debug, Clone)]
pub struct Smoother {
    /// Media time the scroll position currently implies.
    target: f64,
    /// Media time the backend should visually be at; lags the target.
    current: f64,
    activity: Activity,
    /// When the last qualifying input was seen.
    last_input_at: Option<Instant>,
}

impl Smoother {
    pub fn new() -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            activity: Activity::Idle,
            last_input_at: None,
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Replace the chase target.  Takes effect on the next pass.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Force the applied time (used when a new duration re-bases the
    /// mapping and the picture should jump rather than glide).
    pub fn force_current(&mut self, current: f64) {
        self.current = current;
    }

    /// Record a qualifying input.  Returns `true` when this wakes the loop
    /// from `Idle` — the caller should run one immediate pass so the first
    /// response does not wait a full tick.
    pub fn wake(&mut self, now: Instant) -> bool {
        self.last_input_at = Some(now);
        if self.activity == Activity::Idle {
            self.activity = Activity::Batching;
            true
        } else {
            false
        }
    }

    /// Suspend the loop unconditionally (visibility loss, shutdown).
    pub fn suspend(&mut self) {
        self.activity = Activity::Idle;
    }

    /// One smoothing pass.
    ///
    /// `bound` is the largest admissible media time (`duration − guard`);
    /// the applied time is clamped into `[0, bound]` after every mutation.
    /// `ready` gates actual movement — the idle timeout is still honored
    /// while gated, so an absent backend cannot keep the loop awake.
    pub fn step(&mut self, now: Instant, cfg: &EngineConfig, bound: f64, ready: bool) -> Step {
        if self.activity == Activity::Idle {
            return Step::Asleep;
        }

        let quiet = self
            .last_input_at
            .map_or(true, |t| now.duration_since(t) > cfg.idle_timeout);
        if quiet {
            self.activity = Activity::Idle;
            return Step::WentIdle;
        }

        if !ready {
            return Step::Held;
        }

        let bound = bound.max(0.0);
        let diff = self.target - self.current;

        if diff.abs() <= cfg.snap_threshold {
            self.current = self.target.clamp(0.0, bound);
            return Step::Snapped(self.current);
        }

        self.current += diff * cfg.smoothing;
        self.current = self.current.clamp(0.0, bound);
        Step::Advanced(self.current)
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────────────────────── tests ─────────────
