//! Help popup overlay — the harness's stand-in for a navigation menu.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Key help overlay.
pub struct HelpPopup;

const BINDINGS: &[(&str, &str)] = &[
    ("↑/↓  j/k", "scroll one row"),
    ("PgUp/PgDn  Space", "scroll one screen"),
    ("Home/End", "top / bottom"),
    ("1–9", "jump to section (closes this menu)"),
    ("n/p", "next / previous section"),
    ("wheel", "scroll"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (BINDINGS.len() as u16) + 6;
        let popup = centered_fixed(46, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Keys ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        for (keys, what) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:<18}"),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(*what, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// A fixed-size rect centered in `area`, clamped to fit.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
