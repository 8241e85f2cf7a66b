use chrono::{DateTime, Timelike, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, FilterField, Mode};

/// Render the filter row: two date inputs while editing, otherwise a
/// summary of the active range.
pub fn render_filter_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if app.mode == Mode::Filter {
        input_line(app)
    } else {
        summary_line(app)
    };

    // Right-aligned hint
    let mut spans = line.spans;
    let hint = match app.mode {
        Mode::Filter => "Tab switch  Enter apply  Esc cancel",
        _ => "",
    };
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if hint_width > 0 && content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The two inputs, with a cursor glyph in the focused one.
fn input_line(app: &App) -> Line<'_> {
    let bg = app.theme.background;
    let label = |focused: bool| {
        if focused {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        }
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        " from: ",
        label(app.filter_field == FilterField::From),
    ));
    push_input(
        &mut spans,
        app,
        &app.filter_from,
        app.filter_from_cursor,
        app.filter_field == FilterField::From,
    );
    spans.push(Span::styled(
        "   to: ",
        label(app.filter_field == FilterField::To),
    ));
    push_input(
        &mut spans,
        app,
        &app.filter_to,
        app.filter_to_cursor,
        app.filter_field == FilterField::To,
    );
    Line::from(spans)
}

fn push_input<'a>(
    spans: &mut Vec<Span<'a>>,
    app: &App,
    text: &'a str,
    cursor: usize,
    focused: bool,
) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    if focused {
        spans.push(Span::styled(&text[..cursor], text_style));
        spans.push(Span::styled(
            "\u{258C}", // ▌ cursor
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(&text[cursor..], text_style));
    } else {
        spans.push(Span::styled(text, text_style));
    }
}

/// Outside filter mode: the active range, or a dim key hint.
fn summary_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let filter = app.board.filter();
    if filter.is_active() {
        let from = filter
            .from
            .map(fmt_bound)
            .unwrap_or_else(|| "start".to_string());
        let to = filter.to.map(fmt_bound).unwrap_or_else(|| "end".to_string());
        Line::from(vec![
            Span::styled(
                " filter: ".to_string(),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
            Span::styled(
                format!("{} → {}", from, to),
                Style::default().fg(app.theme.yellow).bg(bg),
            ),
            Span::styled(
                "  (r clears)".to_string(),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ])
    } else {
        Line::from(Span::styled(
            " f filter · t/d sort".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    }
}

/// Date-only when the bound sits at midnight, full minutes otherwise.
fn fmt_bound(bound: DateTime<Utc>) -> String {
    if bound.hour() == 0 && bound.minute() == 0 && bound.second() == 0 {
        bound.format("%Y-%m-%d").to_string()
    } else {
        bound.format("%Y-%m-%d %H:%M").to_string()
    }
}
