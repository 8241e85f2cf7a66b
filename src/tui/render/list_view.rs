use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::{SortDirection, SortKey};
use crate::tui::app::{App, LoadState};

const CHECKBOX_COL: usize = 5; // " [x] "
const DATE_COL: usize = 10; // MM/DD/YYYY

/// Render the header row plus the visible todo rows.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.board.visible();
    let width = area.width as usize;
    let title_width = width.saturating_sub(CHECKBOX_COL + DATE_COL + 4);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(header_line(app, title_width));

    if visible.is_empty() {
        lines.push(empty_line(app));
    } else {
        // Keep the cursor on screen (one line is taken by the header)
        let rows_height = (area.height as usize).saturating_sub(1).max(1);
        if app.cursor < app.scroll_offset {
            app.scroll_offset = app.cursor;
        } else if app.cursor >= app.scroll_offset + rows_height {
            app.scroll_offset = app.cursor + 1 - rows_height;
        }

        for (i, todo) in visible
            .iter()
            .enumerate()
            .skip(app.scroll_offset)
            .take(rows_height)
        {
            let is_cursor = i == app.cursor;
            let is_selected = app.board.selection().contains(todo.id);
            let bg = if is_cursor {
                app.theme.selection_bg
            } else {
                app.theme.background
            };

            let mut spans: Vec<Span> = Vec::new();

            // Checkbox column
            let mark = if is_selected { " [x] " } else { " [ ] " };
            let mark_style = if is_selected {
                Style::default().fg(app.theme.green).bg(bg)
            } else {
                Style::default().fg(app.theme.dim).bg(bg)
            };
            spans.push(Span::styled(mark, mark_style));

            // Title column
            let mut title_style = if is_cursor {
                Style::default().fg(app.theme.text_bright).bg(bg)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            if todo.completed {
                title_style = title_style
                    .fg(app.theme.dim)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            let title = truncate_to_width(&todo.title, title_width);
            let pad = title_width.saturating_sub(title.width());
            spans.push(Span::styled(title, title_style));
            spans.push(Span::styled(" ".repeat(pad + 2), Style::default().bg(bg)));

            // Date column
            spans.push(Span::styled(
                todo.display_date(),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
            spans.push(Span::styled("  ", Style::default().bg(bg)));

            lines.push(Line::from(spans));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Column headers, with the sort arrow on the active column and the
/// select-all checkbox state in the checkbox column.
fn header_line(app: &App, title_width: usize) -> Line<'static> {
    let sort = app.board.sort();
    let arrow = |key: SortKey| -> &'static str {
        if sort.key != key {
            return "  ";
        }
        match sort.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    };

    let all = if app.board.selection().all_visible_selected() {
        " [x] "
    } else {
        " [ ] "
    };
    let all_style = if app.board.selection().all_visible_selected() {
        Style::default()
            .fg(app.theme.green)
            .bg(app.theme.background)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    };

    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let arrow_style = Style::default()
        .fg(app.theme.highlight)
        .bg(app.theme.background);

    let title_label = format!("Title{}", arrow(SortKey::Title));
    let pad = title_width.saturating_sub(title_label.width());

    let mut spans = vec![
        Span::styled(all.to_string(), all_style),
        Span::styled("Title".to_string(), header_style),
        Span::styled(arrow(SortKey::Title).to_string(), arrow_style),
        Span::styled(
            " ".repeat(pad + 2),
            Style::default().bg(app.theme.background),
        ),
        Span::styled("Created".to_string(), header_style),
        Span::styled(arrow(SortKey::CreationDate).to_string(), arrow_style),
    ];
    spans.push(Span::styled(
        " ".to_string(),
        Style::default().bg(app.theme.background),
    ));
    Line::from(spans)
}

/// One dim line explaining why the list is empty.
fn empty_line(app: &App) -> Line<'static> {
    let text = match &app.load_state {
        LoadState::Loading => " Loading todos…".to_string(),
        LoadState::Failed(_) => " Nothing loaded — fetch failed".to_string(),
        LoadState::Loaded if app.board.len() > 0 => {
            " No todos match the current filter".to_string()
        }
        LoadState::Loaded => " No todos".to_string(),
    };
    Line::from(Span::styled(
        text,
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ))
}

/// Cut `text` to at most `max` display columns, adding an ellipsis when
/// anything was dropped.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw + 1 > max {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("elevenchars", 10), "elevencha…");
        assert_eq!(truncate_to_width("", 5), "");
    }
}
