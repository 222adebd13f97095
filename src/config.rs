//! Engine tuning constants.
//!
//! Every knob of the scrub engine lives in one value so a session is fully
//! described by the `EngineConfig` it was constructed with.  The CLI can
//! override any field, and `validated()` clamps whatever arrives into ranges
//! the engine's invariants hold under.

use std::time::Duration;

/// Media-time span assumed until real metadata arrives, seconds.
pub const FALLBACK_DURATION: f64 = 18.0;

/// Upper bound applied to any reported media duration, seconds.
pub const DURATION_CAP: f64 = 60.0 * 5.0;

/// Lower bound applied to any reported media duration, seconds.
pub const DURATION_FLOOR: f64 = 1.0;

/// Convergence snap distance, seconds of media time (ignore micro seeks).
pub const SNAP_THRESHOLD: f64 = 0.006;

/// Per-tick fraction of the remaining gap closed (higher = snappier).
pub const SMOOTH_FACTOR: f64 = 0.45;

/// Cadence of the smoothing loop while active (~25 passes/sec).
pub const TICK_INTERVAL: Duration = Duration::from_millis(40);

/// Minimum spacing between actual writes to the playback position.
pub const MIN_SEEK_INTERVAL: Duration = Duration::from_millis(40);

/// Input silence after which the smoothing loop suspends.
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(250);

/// Distance kept from end-of-media so a seek never lands on the final
/// instant (some backends treat that as "ended" and reject it).
pub const END_GUARD: f64 = 0.001;

// ───────────────────────────────────────── config ────────────

/// All tuning constants of the scrub engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Media duration used before real metadata is known, seconds.
    pub fallback_duration: f64,
    /// Upper bound on any reported duration, seconds.
    pub duration_cap: f64,
    /// Lower bound on any reported duration, seconds.
    pub duration_floor: f64,
    /// Gap below which current time snaps onto the target.
    pub snap_threshold: f64,
    /// Fraction of the remaining gap closed per tick, in (0, 1).
    pub smoothing: f64,
    /// Smoothing-loop cadence while input is active.
    pub tick_interval: Duration,
    /// Minimum spacing between playback-position writes.
    pub min_seek_interval: Duration,
    /// Input silence after which tick work suspends.
    pub idle_timeout: Duration,
    /// Seconds kept clear of the end of the media.
    pub end_guard: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback_duration: FALLBACK_DURATION,
            duration_cap: DURATION_CAP,
            duration_floor: DURATION_FLOOR,
            snap_threshold: SNAP_THRESHOLD,
            smoothing: SMOOTH_FACTOR,
            tick_interval: TICK_INTERVAL,
            min_seek_interval: MIN_SEEK_INTERVAL,
            idle_timeout: IDLE_TIMEOUT,
            end_guard: END_GUARD,
        }
    }
}

impl EngineConfig {
    /// Clamp every field into a range the engine's invariants hold under.
    ///
    /// Notably `idle_timeout` is kept at least as long as
    /// `min_seek_interval`: after convergence the loop must stay awake long
    /// enough for the final rate-limited write to flush.
    pub fn validated(mut self) -> Self {
        if !self.fallback_duration.is_finite() || self.fallback_duration <= 0.0 {
            self.fallback_duration = FALLBACK_DURATION;
        }
        if !self.duration_cap.is_finite() || self.duration_cap <= 0.0 {
            self.duration_cap = DURATION_CAP;
        }
        if !self.duration_floor.is_finite() || self.duration_floor <= 0.0 {
            self.duration_floor = DURATION_FLOOR;
        }
        if self.duration_floor > self.duration_cap {
            self.duration_floor = self.duration_cap;
        }
        self.fallback_duration = self
            .fallback_duration
            .clamp(self.duration_floor, self.duration_cap);

        if !self.snap_threshold.is_finite() || self.snap_threshold < 0.0 {
            self.snap_threshold = SNAP_THRESHOLD;
        }
        if !self.smoothing.is_finite() {
            self.smoothing = SMOOTH_FACTOR;
        }
        self.smoothing = self.smoothing.clamp(0.01, 0.99);

        self.tick_interval = self.tick_interval.max(Duration::from_millis(1));
        self.min_seek_interval = self.min_seek_interval.max(Duration::from_millis(1));
        self.idle_timeout = self.idle_timeout.max(self.min_seek_interval);

        if !self.end_guard.is_finite() || self.end_guard <= 0.0 {
            self.end_guard = END_GUARD;
        }

        self
    }
}

// ───────────────────────────────────────── tests ─────────────
