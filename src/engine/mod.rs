//! Scroll-to-media-time synchronization.
//!
//! Converts a high-frequency, noisy scroll signal into a smooth, bounded,
//! resource-frugal sequence of media seeks.  Four small facilities:
//! [`sampler`] normalizes scroll position to a progress fraction,
//! [`mapper`] turns progress into a target timestamp, [`smoother`] chases
//! the target on a periodic cadence, and [`actuator`] writes the result to
//! the backend under its own rate limit.
//!
//! Nothing in this module depends on any TUI or rendering crate.  The host
//! injects its capabilities ([`sampler::ScrollSurface`],
//! [`actuator::MediaSink`]) at the single [`ScrubEngine::dispatch`] entry
//! point; there is no other way in.

pub mod actuator;
pub mod mapper;
pub mod sampler;
pub mod smoother;

use std::time::Instant;

use tracing::{debug, trace};

use crate::config::EngineConfig;
use actuator::{MediaSink, SeekActuator};
use sampler::ScrollSurface;
use smoother::{Activity, Smoother, Step};

/// Host happenings the engine reacts to — one dispatcher, one update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The scroll offset moved (wheel, keys, drag).
    Scrolled,
    /// Content or viewport extents changed.
    Resized,
    /// The document jumped straight to an anchor.
    AnchorJump,
    /// The host became visible (`true`) or hidden (`false`).
    Visibility(bool),
    /// The backend's media metadata became available.
    MetadataLoaded,
    /// Periodic smoothing pass.
    Tick,
}

/// The scroll-scrub engine: one owned value per session, no globals.
pub struct ScrubEngine {
    cfg: EngineConfig,
    /// Duration in effect — the configured fallback until real metadata is
    /// accepted.
    duration: f64,
    /// Latch: real metadata is accepted at most once.
    metadata_seen: bool,
    /// Last sampled progress, kept so a duration change can re-map it
    /// without waiting for a fresh scroll event.
    progress: f64,
    visible: bool,
    smoother: Smoother,
    actuator: SeekActuator,
}

impl ScrubEngine {
    pub fn new(cfg: EngineConfig) -> Self {
        let cfg = cfg.validated();
        Self {
            duration: cfg.fallback_duration,
            metadata_seen: false,
            progress: 0.0,
            visible: true,
            smoother: Smoother::new(),
            actuator: SeekActuator::new(cfg.min_seek_interval),
            cfg,
        }
    }

    // ── read-only view for the host UI ─────────────────────────

    /// Media time the backend should visually be at.
    pub fn current_time(&self) -> f64 {
        self.smoother.current()
    }

    /// Media time the scroll position implies.
    pub fn target_time(&self) -> f64 {
        self.smoother.target()
    }

    /// Duration in effect (fallback or accepted metadata).
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Last sampled scroll progress, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn activity(&self) -> Activity {
        self.smoother.activity()
    }

    pub fn is_batching(&self) -> bool {
        self.smoother.activity() == Activity::Batching
    }

    // ── the single update path ─────────────────────────────────

    /// Route one host event through the state machine.
    pub fn dispatch(
        &mut self,
        event: EngineEvent,
        now: Instant,
        surface: &impl ScrollSurface,
        sink: &mut impl MediaSink,
    ) {
        match event {
            EngineEvent::Scrolled | EngineEvent::Resized | EngineEvent::AnchorJump => {
                self.on_input(now, surface, sink);
            }
            EngineEvent::Visibility(false) => {
                self.visible = false;
                self.smoother.suspend();
                trace!("hidden, smoothing suspended");
            }
            EngineEvent::Visibility(true) => {
                self.visible = true;
                // Exactly one recomputation + resumption from fresh state.
                self.on_input(now, surface, sink);
            }
            EngineEvent::MetadataLoaded => self.on_metadata(now, surface, sink),
            EngineEvent::Tick => self.tick(now, sink),
        }
    }

    /// Qualifying input: resample, retarget, wake the loop.
    ///
    /// The target is updated even while hidden (it is a pure function of
    /// sampled state), but the loop only wakes — and therefore writes —
    /// while visible.
    fn on_input(&mut self, now: Instant, surface: &impl ScrollSurface, sink: &mut impl MediaSink) {
        self.progress = sampler::sample(surface);
        self.retarget();
        if !self.visible {
            return;
        }
        if self.smoother.wake(now) {
            // Immediate pass so the first response doesn't wait a full tick.
            self.tick(now, sink);
        }
    }

    /// Metadata arrival: accept a valid duration once, re-map the held
    /// progress, jump the applied time onto the fresh target, warm up.
    fn on_metadata(
        &mut self,
        now: Instant,
        surface: &impl ScrollSurface,
        sink: &mut impl MediaSink,
    ) {
        if !self.metadata_seen {
            match sink.duration() {
                Some(d) if d.is_finite() && d > 0.0 => {
                    self.duration = d.clamp(self.cfg.duration_floor, self.cfg.duration_cap);
                    self.metadata_seen = true;
                    debug!(duration = self.duration, "media duration accepted");
                }
                reported => {
                    // Unusable report: keep the fallback, keep the latch.
                    debug!(?reported, "unusable media duration, keeping fallback");
                }
            }
        }

        self.progress = sampler::sample(surface);
        self.retarget();
        self.smoother.force_current(self.smoother.target());

        if self.visible {
            self.actuator.warm_up(self.smoother.current(), now, sink);
        }
    }

    fn retarget(&mut self) {
        self.smoother
            .set_target(mapper::map_to_target(self.progress, self.duration, self.cfg.end_guard));
    }

    /// One smoothing pass; the actuator independently decides to write.
    fn tick(&mut self, now: Instant, sink: &mut impl MediaSink) {
        let bound = self.duration - self.cfg.end_guard;
        let ready = self.visible && sink.is_ready();
        match self.smoother.step(now, &self.cfg, bound, ready) {
            Step::Asleep | Step::Held => {}
            Step::WentIdle => trace!("input quiet, smoothing suspended"),
            Step::Snapped(t) => {
                self.actuator.apply_converged(t, now, sink);
            }
            Step::Advanced(t) => {
                self.actuator.apply(t, now, sink);
            }
        }
    }
}

// ───────────────────────────────────────── tests ─────────────
