//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── nav bar ────────────────────────────────────────────────
    pub fn nav_style() -> Style {
        Style::default().fg(Color::White)
    }

    /// The section the scroll offset currently sits in.
    pub fn nav_active_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // ── document pane ──────────────────────────────────────────
    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    // ── media pane ─────────────────────────────────────────────
    pub fn timecode_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gauge_filled_style() -> Style {
        Style::default().fg(Color::LightBlue)
    }

    pub fn gauge_empty_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn target_marker_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn scrubbing_badge_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn idle_badge_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn loading_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn frame_style() -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn deck_detail_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
