use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::render::popup_rect;

const KEYS: &[(&str, &str)] = &[
    ("j/k ↑/↓", "move cursor"),
    ("g / G", "first / last row"),
    ("space", "select row"),
    ("a", "select / deselect all visible"),
    ("t", "sort by title (again: reverse)"),
    ("d", "sort by date (again: reverse)"),
    ("f", "edit date filter"),
    ("r", "reset filter"),
    ("e / Enter", "edit description"),
    ("x / Del", "delete row"),
    ("R", "re-fetch the list"),
    ("q", "quit"),
];

/// Render the help overlay listing all keybindings.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let height = KEYS.len() as u16 + 4;
    let popup = popup_rect(area, 46, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(app.theme.background))
        .title(" keys ")
        .title_style(
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![Line::default()];
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<10} ", key),
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
            Span::styled(*action, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " any key closes this",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}
