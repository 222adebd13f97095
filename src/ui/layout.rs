//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: nav bar on top, document beside the media deck,
/// and a bottom status bar.
pub struct AppLayout {
    pub nav_area: Rect,
    pub doc_area: Rect,
    pub media_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // nav bar
                Constraint::Min(3),    // panes
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(58), // document
                Constraint::Percentage(42), // media deck
            ])
            .split(rows[1]);

        Self {
            nav_area: rows[0],
            doc_area: panes[0],
            media_area: panes[1],
            status_area: rows[2],
        }
    }

    /// Inner height of the document pane (minus its borders), in rows.
    pub fn doc_viewport_rows(&self) -> u16 {
        self.doc_area.height.saturating_sub(2)
    }
}
