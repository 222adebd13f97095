//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event
//! handling).  The scrub engine and the simulated deck are both owned
//! fields; every engine interaction goes through [`AppState::scrub`].

use std::time::Instant;

use crate::config::EngineConfig;
use crate::engine::sampler::ScrollSurface;
use crate::engine::{EngineEvent, ScrubEngine};
use crate::media::sim::SimMedia;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Main,
    Help,
}

// ───────────────────────────────────────── document ──────────

/// One titled stretch of the demo document.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    /// Rows this section occupies, heading included.
    pub height: usize,
}

/// The scrollable demo document — a landing page made of sections.
#[derive(Debug, Clone)]
pub struct Document {
    pub sections: Vec<Section>,
}

/// Rows above a section heading that still count as "inside" it when
/// deciding which nav entry to highlight.
const NAV_ACTIVATION_MARGIN: f64 = 5.0;

const SAMPLE_TITLES: &[&str] = &["Overview", "Story", "Craft", "Gallery", "Specs", "Contact"];

impl Document {
    /// Build the demo document: `count` sections of `rows` body rows each.
    pub fn sample(count: usize, rows: usize) -> Self {
        let count = count.max(1);
        let sections = (0..count)
            .map(|i| {
                let title = if i < SAMPLE_TITLES.len() {
                    SAMPLE_TITLES[i].to_string()
                } else {
                    format!("Part {}", i + 1)
                };
                Section {
                    title,
                    height: rows.max(3) + 1, // +1 heading row
                }
            })
            .collect();
        Self { sections }
    }

    pub fn content_height(&self) -> usize {
        self.sections.iter().map(|s| s.height).sum()
    }

    /// First row of section `idx`.
    pub fn section_top(&self, idx: usize) -> usize {
        self.sections.iter().take(idx).map(|s| s.height).sum()
    }

    /// Index of the section the given scroll offset sits in, with a small
    /// margin so a heading just below the top edge already counts.
    pub fn active_section(&self, offset: f64) -> usize {
        let mut active = 0;
        for (i, _) in self.sections.iter().enumerate() {
            if offset + NAV_ACTIVATION_MARGIN >= self.section_top(i) as f64 {
                active = i;
            }
        }
        active
    }
}

// ───────────────────────────────────────── scroll view ───────

/// Snapshot of the scroll geometry handed to the engine's sampler.
#[derive(Debug, Clone, Copy)]
pub struct DocView {
    pub offset: f64,
    pub content: f64,
    pub viewport: f64,
}

impl ScrollSurface for DocView {
    fn offset(&self) -> f64 {
        self.offset
    }
    fn content_height(&self) -> f64 {
        self.content
    }
    fn viewport_height(&self) -> f64 {
        self.viewport
    }
}

// ───────────────────────────────────────── app state ─────────

/// Top-level application state.
pub struct AppState {
    /// The scrollable demo document.
    pub doc: Document,
    /// Scroll offset in rows from the top of the document.
    pub scroll: f64,
    /// Inner height of the document pane, in rows.  Updated on resize.
    pub doc_viewport: f64,
    /// The scroll-to-media synchronization engine.
    pub engine: ScrubEngine,
    /// The simulated media deck the engine drives.
    pub media: SimMedia,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Monotonic tick counter (drives the loading spinner frame).
    pub tick_count: u64,
}

impl AppState {
    pub fn new(doc: Document, cfg: EngineConfig, media: SimMedia) -> Self {
        Self {
            doc,
            scroll: 0.0,
            doc_viewport: 1.0,
            engine: ScrubEngine::new(cfg),
            media,
            active_view: ActiveView::default(),
            should_quit: false,
            status_message: None,
            tick_count: 0,
        }
    }

    /// Largest admissible scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.doc.content_height() as f64 - self.doc_viewport).max(0.0)
    }

    /// Move the scroll offset by `delta` rows, clamped to the document.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll());
    }

    /// Jump straight to the top of section `idx` (anchor navigation).
    /// Returns `false` when no such section exists.
    pub fn jump_to_section(&mut self, idx: usize) -> bool {
        if idx >= self.doc.sections.len() {
            return false;
        }
        self.scroll = (self.doc.section_top(idx) as f64).clamp(0.0, self.max_scroll());
        true
    }

    /// Section the current scroll offset sits in (nav highlight).
    pub fn active_section(&self) -> usize {
        self.doc.active_section(self.scroll)
    }

    /// Current scroll geometry for the engine's sampler.
    pub fn doc_view(&self) -> DocView {
        DocView {
            offset: self.scroll,
            content: self.doc.content_height() as f64,
            viewport: self.doc_viewport,
        }
    }

    /// Route one event through the engine against the live document and
    /// deck.  The single place the engine is mutated.
    pub fn scrub(&mut self, event: EngineEvent, now: Instant) {
        let view = self.doc_view();
        self.engine.dispatch(event, now, &view, &mut self.media);
    }

    /// Record a new document-pane height and keep the offset admissible.
    pub fn set_doc_viewport(&mut self, rows: f64) {
        self.doc_viewport = rows.max(1.0);
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());
    }
}

// ───────────────────────────────────────── tests ─────────────
