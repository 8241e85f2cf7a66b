use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FilterField, Mode};

use super::common::{delete_back, delete_forward, insert_char, next_boundary, prev_boundary};

/// Keys while the from/to filter inputs are focused.
pub(super) fn handle_filter(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => {
            // Unparseable or empty text leaves that bound unset
            app.board.set_filter(&app.filter_from, &app.filter_to);
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.filter_field = match app.filter_field {
                FilterField::From => FilterField::To,
                FilterField::To => FilterField::From,
            };
        }
        KeyCode::Left => {
            let (text, cursor) = focused(app);
            *cursor = prev_boundary(text, *cursor);
        }
        KeyCode::Right => {
            let (text, cursor) = focused(app);
            *cursor = next_boundary(text, *cursor);
        }
        KeyCode::Home => *focused(app).1 = 0,
        KeyCode::End => {
            let (text, cursor) = focused(app);
            *cursor = text.len();
        }
        KeyCode::Backspace => {
            let (text, cursor) = focused(app);
            *cursor = delete_back(text, *cursor);
        }
        KeyCode::Delete => {
            let (text, cursor) = focused(app);
            delete_forward(text, *cursor);
        }
        KeyCode::Char(c) if !c.is_control() => {
            let (text, cursor) = focused(app);
            *cursor = insert_char(text, *cursor, c);
        }
        _ => {}
    }
}

/// The input under focus, as (buffer, byte cursor).
fn focused(app: &mut App) -> (&mut String, &mut usize) {
    match app.filter_field {
        FilterField::From => (&mut app.filter_from, &mut app.filter_from_cursor),
        FilterField::To => (&mut app.filter_to, &mut app.filter_to_cursor),
    }
}
