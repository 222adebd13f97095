//! Media pane — what the engine is doing to the deck, drawn live.
//!
//! Shows the load state, a timecode, the scrub gauge with the chase target
//! marked, a pseudo-frame whose pattern is a pure function of the applied
//! media time (so scrubbing visibly "plays" the deck), and the deck's
//! counters.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::engine::smoother::Activity;
use crate::engine::ScrubEngine;
use crate::media::sim::{LoadState, SimMedia};
use crate::ui::theme::Theme;

/// Braille-dot spinner frames shown while metadata loads.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Shade ramp the pseudo-frame is painted with.
const SHADES: &[char] = &['░', '▒', '▓', '█'];

/// Format seconds of media time as `mm:ss.mmm`.
pub fn format_timecode(secs: f64) -> String {
    let secs = secs.max(0.0);
    let whole = secs as u64;
    let millis = ((secs - whole as f64) * 1000.0).round() as u64;
    // Rounding can carry into the next second.
    let (whole, millis) = if millis >= 1000 {
        (whole + 1, 0)
    } else {
        (whole, millis)
    };
    format!("{:02}:{:02}.{millis:03}", whole / 60, whole % 60)
}

/// The media deck pane.
pub struct MediaPane<'a> {
    engine: &'a ScrubEngine,
    media: &'a SimMedia,
    /// Monotonic tick counter (drives the loading spinner).
    tick: u64,
}

impl<'a> MediaPane<'a> {
    pub fn new(engine: &'a ScrubEngine, media: &'a SimMedia, tick: u64) -> Self {
        Self { engine, media, tick }
    }

    fn header_line(&self) -> Line<'static> {
        if self.media.load_state() == LoadState::Loading {
            let frame = SPINNER_FRAMES[(self.tick as usize) % SPINNER_FRAMES.len()];
            return Line::from(Span::styled(
                format!(" {frame} loading metadata…"),
                Theme::loading_style(),
            ));
        }

        let badge = match self.engine.activity() {
            Activity::Batching => Span::styled(" SCRUB ", Theme::scrubbing_badge_style()),
            Activity::Idle => Span::styled(" idle  ", Theme::idle_badge_style()),
        };
        let mut spans = vec![Span::raw(" "), badge];
        if self.media.is_flaky() {
            spans.push(Span::styled("  flaky backend", Theme::loading_style()));
        } else if self.media.is_playing() {
            spans.push(Span::styled("  warm", Theme::deck_detail_style()));
        }
        Line::from(spans)
    }

    fn timecode_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(format_timecode(self.engine.current_time()), Theme::timecode_style()),
            Span::styled(
                format!(" / {}", format_timecode(self.engine.duration())),
                Theme::deck_detail_style(),
            ),
        ])
    }

    /// Marker row: `◆` above the gauge column the target sits at.
    fn marker_line(&self, width: usize) -> Line<'static> {
        let frac = (self.engine.target_time() / self.engine.duration()).clamp(0.0, 1.0);
        let col = ((width.saturating_sub(3)) as f64 * frac) as usize;
        let mut text = " ".repeat(col + 1);
        text.push('◆');
        Line::from(Span::styled(text, Theme::target_marker_style()))
    }

    fn gauge_line(&self, width: usize) -> Line<'static> {
        let cells = width.saturating_sub(2);
        let frac = (self.engine.current_time() / self.engine.duration()).clamp(0.0, 1.0);
        let filled = (cells as f64 * frac).round() as usize;
        Line::from(vec![
            Span::raw(" "),
            Span::styled("▰".repeat(filled), Theme::gauge_filled_style()),
            Span::styled("▱".repeat(cells - filled), Theme::gauge_empty_style()),
        ])
    }

    /// One row of the pseudo-frame: a diagonal shade pattern phased by the
    /// applied media time, so seeks visibly move the picture.
    fn frame_row(&self, row: usize, width: usize) -> Line<'static> {
        let phase = (self.engine.current_time() * 6.0) as usize;
        let mut text = String::with_capacity(width);
        text.push(' ');
        for col in 0..width.saturating_sub(2) {
            let v = (col + row * 3 + phase) % (SHADES.len() * 4);
            text.push(SHADES[v / 4]);
        }
        Line::from(Span::styled(text, Theme::frame_style()))
    }

    fn counters_line(&self) -> Line<'static> {
        let hints = if self.media.is_warmed() { " · muted inline" } else { "" };
        Line::from(Span::styled(
            format!(
                " seeks {} · dropped {} · scroll {:>3.0}%{hints}",
                self.media.seeks_applied(),
                self.media.seeks_rejected(),
                self.engine.progress() * 100.0
            ),
            Theme::deck_detail_style(),
        ))
    }
}

impl Widget for MediaPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 6 {
            return;
        }
        let width = area.width as usize;

        let mut lines = vec![
            self.header_line(),
            Line::raw(""),
            self.timecode_line(),
            self.marker_line(width),
            self.gauge_line(width),
            Line::raw(""),
        ];

        // Fill the remaining rows with the pseudo-frame, keeping one row
        // for the counters.
        let art_rows = (area.height as usize).saturating_sub(lines.len() + 1);
        for row in 0..art_rows {
            lines.push(self.frame_row(row, width));
        }
        lines.push(self.counters_line());

        for (i, line) in lines.iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timecodes_read_like_a_deck() {
        assert_eq!(format_timecode(0.0), "00:00.000");
        assert_eq!(format_timecode(9.0), "00:09.000");
        assert_eq!(format_timecode(61.25), "01:01.250");
        assert_eq!(format_timecode(-4.0), "00:00.000");
    }

    #[test]
    fn rounding_carries_into_the_next_second() {
        assert_eq!(format_timecode(5.9996), "00:06.000");
    }
}
