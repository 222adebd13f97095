//! Seek actuation — rate-limited writes to the playback backend.
//!
//! The smoothing loop runs at tick cadence; actual position writes are
//! throttled a second time here so not every pass touches the backend
//! (every seek forces a decode-to-keyframe).  Rejected writes are expected
//! on some platforms and are dropped — the next pass retries with a fresh
//! value, so no backlog of stale attempts can form.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, trace};

/// Sink position this close to the converged value needs no final write.
const POSITION_EPSILON: f64 = 0.001;

/// Why the playback backend refused an operation.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("backend is not ready to accept seeks")]
    NotReady,
    #[error("position {0:.3}s is outside the seekable range")]
    OutOfRange(f64),
    #[error("playback start was refused")]
    PlaybackRefused,
}

/// Playback capability the engine writes to.
///
/// The engine is the sole writer of the playback position and never touches
/// play/pause state beyond the one warm-up attempt.
pub trait MediaSink {
    /// Can the backend accept seeks right now?
    fn is_ready(&self) -> bool;
    /// Duration reported by the backend's metadata, if any.  May be
    /// non-finite or nonsense; the caller validates.
    fn duration(&self) -> Option<f64>;
    /// Current playback position, seconds.
    fn position(&self) -> f64;
    /// Move the playback position.  Rejection is expected and transient.
    fn seek(&mut self, secs: f64) -> Result<(), MediaError>;
    /// Hint silent inline decoding (mute, inline playback, eager preload).
    fn set_warm_hints(&mut self);
    /// Start playback to keep the decode pipeline warm.  Best-effort.
    fn play(&mut self) -> Result<(), MediaError>;
}

// ───────────────────────────────────────── actuator ──────────

/// Rate limiter and failure boundary in front of a [`MediaSink`].
#[derive(Debug, Clone)]
pub struct SeekActuator {
    min_interval: Duration,
    /// When the last write attempt went out (successful or not — a failed
    /// attempt still consumes the pacing slot so a refusing backend is not
    /// hammered at tick rate).
    last_applied: Option<Instant>,
}

impl SeekActuator {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_applied: None,
        }
    }

    fn due(&self, now: Instant) -> bool {
        self.last_applied
            .map_or(true, |t| now.duration_since(t) >= self.min_interval)
    }

    /// Rate-limited write of an advancing time.  Returns whether a write
    /// was attempted this call.
    pub fn apply(&mut self, time: f64, now: Instant, sink: &mut impl MediaSink) -> bool {
        if !self.due(now) {
            return false;
        }
        if let Err(err) = sink.seek(time) {
            trace!(%err, time, "seek rejected");
        }
        self.last_applied = Some(now);
        true
    }

    /// Write after convergence: skipped entirely when the sink already sits
    /// within [`POSITION_EPSILON`] of the converged value.
    pub fn apply_converged(&mut self, time: f64, now: Instant, sink: &mut impl MediaSink) -> bool {
        if (sink.position() - time).abs() <= POSITION_EPSILON {
            return false;
        }
        self.apply(time, now, sink)
    }

    /// One-time decoder warm-up once metadata is in: silent inline hints,
    /// best-effort playback start, and a seek to the current target so the
    /// backend is not left on an arbitrary initial frame.
    pub fn warm_up(&mut self, time: f64, now: Instant, sink: &mut impl MediaSink) {
        sink.set_warm_hints();
        if let Err(err) = sink.play() {
            // Autoplay refusal is an expected outcome, not an error channel.
            debug!(%err, "warm-up playback refused");
        }
        if let Err(err) = sink.seek(time) {
            trace!(%err, time, "warm-up seek rejected");
        }
        self.last_applied = Some(now);
    }
}

// ───────────────────────────────────────── test support ──────

/// Recording sink shared by the engine's test modules.
#[cfg(test)]
pub(crate) mod testing {
    use super::{MediaError, MediaSink};

    /// Remembers every call, optionally refuses seeks or playback.
    #[derive(Default)]
    pub(crate) struct TestSink {
        pub ready: bool,
        pub reported_duration: Option<f64>,
        pub position: f64,
        pub seeks: Vec<f64>,
        pub rejected: u32,
        pub fail_seeks: bool,
        pub muted: bool,
        pub inline: bool,
        pub preload: bool,
        pub play_calls: u32,
        pub refuse_play: bool,
    }

    impl MediaSink for TestSink {
        fn is_ready(&self) -> bool {
            self.ready
        }
        fn duration(&self) -> Option<f64> {
            self.reported_duration
        }
        fn position(&self) -> f64 {
            self.position
        }
        fn seek(&mut self, secs: f64) -> Result<(), MediaError> {
            if self.fail_seeks {
                self.rejected += 1;
                return Err(MediaError::NotReady);
            }
            self.position = secs;
            self.seeks.push(secs);
            Ok(())
        }
        fn set_warm_hints(&mut self) {
            self.muted = true;
            self.inline = true;
            self.preload = true;
        }
        fn play(&mut self) -> Result<(), MediaError> {
            self.play_calls += 1;
            if self.refuse_play {
                return Err(MediaError::PlaybackRefused);
            }
            Ok(())
        }
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::testing::TestSink;
    use super::*;

    #[test]
    fn writes_in_a_window_respect_the_pacing_bound() {
        let min = Duration::from_millis(40);
        let mut act = SeekActuator::new(min);
        let mut sink = TestSink {
            ready: true,
            ..Default::default()
        };

        // 1 s of passes every 10 ms — four times the write cadence.
        let t0 = Instant::now();
        for i in 0..100u32 {
            act.apply(i as f64 * 0.01, t0 + Duration::from_millis(10) * i, &mut sink);
        }

        let window = Duration::from_millis(990);
        let budget = window.as_millis().div_ceil(min.as_millis()) as usize;
        assert!(
            sink.seeks.len() <= budget,
            "{} writes exceeds budget {budget}",
            sink.seeks.len()
        );
        assert!(sink.seeks.len() >= budget / 2, "throttle starved writes");
    }

    #[test]
    fn a_rejected_write_consumes_the_pacing_slot() {
        let mut act = SeekActuator::new(Duration::from_millis(40));
        let mut sink = TestSink {
            ready: true,
            fail_seeks: true,
            ..Default::default()
        };

        let t0 = Instant::now();
        assert!(act.apply(1.0, t0, &mut sink));
        // Immediately after a rejection, the throttle is still closed.
        assert!(!act.apply(1.1, t0 + Duration::from_millis(5), &mut sink));
        assert_eq!(sink.rejected, 1);
    }

    #[test]
    fn converged_write_is_skipped_when_the_sink_already_matches() {
        let mut act = SeekActuator::new(Duration::from_millis(40));
        let mut sink = TestSink {
            ready: true,
            position: 5.0,
            ..Default::default()
        };

        let t0 = Instant::now();
        assert!(!act.apply_converged(5.0004, t0, &mut sink));
        assert!(sink.seeks.is_empty());

        // A real discrepancy goes through.
        assert!(act.apply_converged(6.0, t0, &mut sink));
        assert_eq!(sink.seeks, vec![6.0]);
    }

    #[test]
    fn warm_up_sets_hints_and_lands_on_the_target_frame() {
        let mut act = SeekActuator::new(Duration::from_millis(40));
        let mut sink = TestSink {
            ready: true,
            refuse_play: true, // autoplay blocked — must not matter
            ..Default::default()
        };

        act.warm_up(9.0, Instant::now(), &mut sink);
        assert!(sink.muted && sink.inline && sink.preload);
        assert_eq!(sink.play_calls, 1);
        assert_eq!(sink.seeks, vec![9.0]);
    }
}
