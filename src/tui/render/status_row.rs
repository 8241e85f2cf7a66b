use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, LoadState};

/// Render the status row (bottom of screen): counts on the left, load
/// state in the middle, key hint on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let visible = app.board.visible().len();
    let total = app.board.len();
    let selected = app.board.selection().len();

    let mut spans: Vec<Span> = Vec::new();
    let mut counts = format!(" {}/{} todos", visible, total);
    if selected > 0 {
        counts.push_str(&format!(" · {} selected", selected));
    }
    spans.push(Span::styled(
        counts,
        Style::default().fg(app.theme.text).bg(bg),
    ));

    match &app.load_state {
        LoadState::Loading => {
            spans.push(Span::styled(
                "  fetching…",
                Style::default().fg(app.theme.yellow).bg(bg),
            ));
        }
        LoadState::Failed(message) => {
            spans.push(Span::styled(
                format!("  fetch failed: {}", message),
                Style::default().fg(app.theme.red).bg(bg),
            ));
        }
        LoadState::Loaded => {}
    }

    let hint = "? help · q quit";
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
