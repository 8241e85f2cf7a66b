use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common::{delete_back, delete_forward, insert_char, next_boundary, prev_boundary};

/// Keys while the description edit panel is open. Every buffer change is
/// pushed into the board's draft, so the session always reflects what is
/// on screen.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.board.cancel_edit();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            app.board.update_draft(&app.edit_buffer);
            app.board.save_edit();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        KeyCode::Left => app.edit_cursor = prev_boundary(&app.edit_buffer, app.edit_cursor),
        KeyCode::Right => app.edit_cursor = next_boundary(&app.edit_buffer, app.edit_cursor),
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.edit_buffer.len(),
        KeyCode::Backspace => {
            app.edit_cursor = delete_back(&mut app.edit_buffer, app.edit_cursor);
            app.board.update_draft(&app.edit_buffer);
        }
        KeyCode::Delete => {
            delete_forward(&mut app.edit_buffer, app.edit_cursor);
            app.board.update_draft(&app.edit_buffer);
        }
        KeyCode::Char(c) if !c.is_control() => {
            app.edit_cursor = insert_char(&mut app.edit_buffer, app.edit_cursor, c);
            app.board.update_draft(&app.edit_buffer);
        }
        _ => {}
    }
}
