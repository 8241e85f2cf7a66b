use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::render::popup_rect;

/// Render the description edit panel as a centered popup over the list.
pub fn render_edit_panel(frame: &mut Frame, app: &App, area: Rect) {
    let Some(id) = app.board.edit().target_id() else {
        return;
    };

    let popup = popup_rect(area, 64, 5);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(app.theme.highlight)
                .bg(app.theme.background),
        )
        .title(format!(" edit description · #{} ", id))
        .title_style(
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor = app.edit_cursor;

    let input = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(&app.edit_buffer[..cursor], text_style),
        Span::styled(
            "\u{258C}", // ▌ cursor
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(&app.edit_buffer[cursor..], text_style),
    ]);
    let hint = Line::from(Span::styled(
        " Enter save · Esc cancel",
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::default(), input, hint]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}
