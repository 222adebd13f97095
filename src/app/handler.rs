//! Input handling — maps key/mouse events to scroll mutations and engine
//! events.
//!
//! Every scroll-changing action funnels through [`scroll_and_scrub`] /
//! [`anchor_jump`] so the engine always hears about the movement in the
//! same event that caused it.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::state::{ActiveView, AppState};
use crate::engine::EngineEvent;

/// Rows moved per mouse-wheel detent.
const WHEEL_STEP: f64 = 3.0;

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Main => handle_main_key(state, key),
        ActiveView::Help => handle_help_key(state, key),
    }
}

fn handle_main_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') => state.active_view = ActiveView::Help,

        KeyCode::Up | KeyCode::Char('k') => scroll_and_scrub(state, -1.0),
        KeyCode::Down | KeyCode::Char('j') => scroll_and_scrub(state, 1.0),
        KeyCode::PageUp => scroll_and_scrub(state, -state.doc_viewport),
        KeyCode::PageDown | KeyCode::Char(' ') => scroll_and_scrub(state, state.doc_viewport),
        KeyCode::Home => {
            state.scroll = 0.0;
            state.scrub(EngineEvent::Scrolled, Instant::now());
        }
        KeyCode::End => {
            state.scroll = state.max_scroll();
            state.scrub(EngineEvent::Scrolled, Instant::now());
        }

        // Anchor navigation: digits address sections directly.
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            anchor_jump(state, idx);
        }
        KeyCode::Char('n') => {
            let idx = state.active_section() + 1;
            anchor_jump(state, idx);
        }
        KeyCode::Char('p') => {
            let idx = state.active_section().saturating_sub(1);
            anchor_jump(state, idx);
        }

        _ => {}
    }
}

// ── Help overlay ────────────────────────────────────────────────

fn handle_help_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Main;
        }
        // Anchor links work from inside the overlay and close it,
        // like a navigation menu would.
        KeyCode::Char(c @ '1'..='9') => {
            state.active_view = ActiveView::Main;
            let idx = (c as usize) - ('1' as usize);
            anchor_jump(state, idx);
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Main {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => scroll_and_scrub(state, -WHEEL_STEP),
        MouseEventKind::ScrollDown => scroll_and_scrub(state, WHEEL_STEP),
        _ => {}
    }
}

// ── Shared actions ──────────────────────────────────────────────

/// Move the scroll offset and tell the engine in the same breath.
fn scroll_and_scrub(state: &mut AppState, delta: f64) {
    state.scroll_by(delta);
    state.scrub(EngineEvent::Scrolled, Instant::now());
}

/// Jump to a section top (anchor navigation) and notify the engine.
fn anchor_jump(state: &mut AppState, idx: usize) {
    if state.jump_to_section(idx) {
        let title = state.doc.sections[idx].title.clone();
        state.status_message = Some(format!("→ {title}"));
        state.scrub(EngineEvent::AnchorJump, Instant::now());
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::media::sim::SimMedia;
    use crate::app::state::Document;

    fn state() -> AppState {
        let doc = Document::sample(4, 19);
        let media = SimMedia::new(42.0, false, false);
        let mut st = AppState::new(doc, EngineConfig::default(), media);
        st.set_doc_viewport(20.0);
        st
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut st = state();
        handle_key(&mut st, press(KeyCode::Char('q')));
        assert!(st.should_quit);

        let mut st = state();
        handle_key(&mut st, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(st.should_quit);
    }

    #[test]
    fn scrolling_keys_move_the_offset_and_wake_the_engine() {
        let mut st = state();
        handle_key(&mut st, press(KeyCode::Down));
        assert_eq!(st.scroll, 1.0);
        assert!(st.engine.is_batching());
        assert!(st.engine.target_time() > 0.0);
    }

    #[test]
    fn digit_anchors_jump_and_close_the_help_overlay() {
        let mut st = state();
        st.active_view = ActiveView::Help;
        handle_key(&mut st, press(KeyCode::Char('3')));
        assert_eq!(st.active_view, ActiveView::Main);
        assert_eq!(st.scroll, 40.0);
        assert!(st.status_message.is_some());
    }

    #[test]
    fn out_of_range_anchor_is_ignored() {
        let mut st = state();
        handle_key(&mut st, press(KeyCode::Char('9')));
        assert_eq!(st.scroll, 0.0);
        assert!(st.status_message.is_none());
    }
}
