//! Scroll a document, scrub a film.
//!
//! Launches a terminal demo: the left pane is a scrollable landing page,
//! the right pane a simulated media deck.  Scrolling the document drives
//! the deck's playback position through the scrub engine — smoothed,
//! throttled, and suspended when input goes quiet.

mod app;
mod config;
mod engine;
mod media;
mod ui;

use std::io::{self, stderr};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent, MediaNotice},
    handler,
    state::{ActiveView, AppState, Document},
};
use crate::config::EngineConfig;
use crate::engine::EngineEvent;
use crate::media::sim::SimMedia;
use crate::ui::{
    document::{nav_line, DocumentPane},
    layout::AppLayout,
    popup::HelpPopup,
    theme::Theme,
    timeline::MediaPane,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll a document, scrub a media timeline")]
struct Cli {
    /// Number of document sections.
    #[arg(long, default_value_t = 6)]
    sections: usize,

    /// Body rows per section.
    #[arg(long, default_value_t = 28)]
    section_rows: usize,

    /// Duration the simulated media reports once loaded, seconds.
    #[arg(long, default_value_t = 42.0)]
    media_duration: f64,

    /// Simulated metadata load delay, milliseconds.
    #[arg(long, default_value_t = 1200)]
    metadata_delay_ms: u64,

    /// Refuse every seek — watch the engine shrug it off.
    #[arg(long)]
    flaky_media: bool,

    /// Refuse playback starts (autoplay-blocked backends).
    #[arg(long)]
    block_autoplay: bool,

    /// Per-tick fraction of the remaining gap closed, in (0, 1).
    #[arg(long)]
    smoothing: Option<f64>,

    /// Smoothing-loop cadence, milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Minimum spacing between playback-position writes, milliseconds.
    #[arg(long)]
    min_seek_ms: Option<u64>,

    /// Input silence before the smoothing loop suspends, milliseconds.
    #[arg(long)]
    idle_ms: Option<u64>,

    /// Media-time span assumed before metadata arrives, seconds.
    #[arg(long)]
    fallback_duration: Option<f64>,
}

impl Cli {
    /// Fold the optional overrides into the engine defaults.
    fn engine_config(&self) -> EngineConfig {
        let mut cfg = EngineConfig::default();
        if let Some(v) = self.smoothing {
            cfg.smoothing = v;
        }
        if let Some(v) = self.tick_ms {
            cfg.tick_interval = Duration::from_millis(v);
        }
        if let Some(v) = self.min_seek_ms {
            cfg.min_seek_interval = Duration::from_millis(v);
        }
        if let Some(v) = self.idle_ms {
            cfg.idle_timeout = Duration::from_millis(v);
        }
        if let Some(v) = self.fallback_duration {
            cfg.fallback_duration = v;
        }
        cfg.validated()
    }
}

// ───────────────────────────────────────── main ──────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let cfg = cli.engine_config();

    // ── build initial state ───────────────────────────────────
    let doc = Document::sample(cli.sections, cli.section_rows);
    let media = SimMedia::new(cli.media_duration, cli.flaky_media, cli.block_autoplay);
    let mut state = AppState::new(doc, cfg, media);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let mut events = spawn_event_reader(cfg.tick_interval);

    // Simulated media load: metadata arrives after a delay, like a real
    // element fetching headers.
    let (media_tx, mut media_rx) = tokio::sync::mpsc::unbounded_channel::<MediaNotice>();
    let metadata_delay = Duration::from_millis(cli.metadata_delay_ms);
    tokio::spawn(async move {
        tokio::time::sleep(metadata_delay).await;
        let _ = media_tx.send(MediaNotice::MetadataReady);
    });

    // ── event loop ────────────────────────────────────────────
    loop {
        // Draw first so the UI stays responsive whatever arrives next.
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());
            state.set_doc_viewport(layout.doc_viewport_rows() as f64);

            frame.render_widget(
                Paragraph::new(nav_line(&state.doc, state.active_section())),
                layout.nav_area,
            );

            let doc_block = Block::default()
                .title(" document ")
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            let doc_inner = doc_block.inner(layout.doc_area);
            frame.render_widget(doc_block, layout.doc_area);
            frame.render_widget(DocumentPane::new(&state.doc, state.scroll), doc_inner);

            let media_block = Block::default()
                .title(" deck ")
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            let media_inner = media_block.inner(layout.media_area);
            frame.render_widget(media_block, layout.media_area);
            frame.render_widget(
                MediaPane::new(&state.engine, &state.media, state.tick_count),
                media_inner,
            );

            let hint = if state.engine.is_batching() {
                "scrubbing…"
            } else {
                "scroll to scrub · ? for keys · q to quit"
            };
            let status_text = state.status_message.as_deref().unwrap_or(hint);
            frame.render_widget(
                Paragraph::new(status_text).style(Theme::status_bar_style()),
                layout.status_area,
            );

            if state.active_view == ActiveView::Help {
                frame.render_widget(HelpPopup, frame.area());
            }
        })?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(_, _) => {
                        // The next draw recomputes the layout; tell the
                        // engine the extents moved under it.
                        state.scrub(EngineEvent::Resized, Instant::now());
                    }
                    AppEvent::FocusGained => {
                        state.scrub(EngineEvent::Visibility(true), Instant::now());
                    }
                    AppEvent::FocusLost => {
                        state.scrub(EngineEvent::Visibility(false), Instant::now());
                    }
                    AppEvent::Tick => {
                        state.tick_count = state.tick_count.wrapping_add(1);
                        state.scrub(EngineEvent::Tick, Instant::now());
                    }
                }
            }

            Some(notice) = media_rx.recv() => {
                match notice {
                    MediaNotice::MetadataReady => {
                        state.media.finish_loading();
                        state.scrub(EngineEvent::MetadataLoaded, Instant::now());
                        state.status_message =
                            Some(format!("metadata in · {}s", cli.media_duration));
                    }
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    Ok(())
}
