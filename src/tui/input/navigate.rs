use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FilterField, Mode};

/// Keys in the main list view.
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.board.visible().len().saturating_sub(1);
        }

        // Selection
        KeyCode::Char(' ') => toggle_row(app),
        KeyCode::Char('a') => {
            let select = !app.board.selection().all_visible_selected();
            app.board.select_all(select);
        }

        // Sorting (header-click semantics: repeat flips direction)
        KeyCode::Char('t') => app.board.sort_by_title(),
        KeyCode::Char('d') => app.board.sort_by_date(),

        // Filtering
        KeyCode::Char('f') => enter_filter(app),
        KeyCode::Char('r') => {
            app.board.reset_filter();
            app.clamp_cursor();
        }

        // Editing and deletion
        KeyCode::Char('e') | KeyCode::Enter => enter_edit(app),
        KeyCode::Char('x') | KeyCode::Delete => delete_row(app),

        // Manual refresh (fresh fetch, wholesale replace on arrival)
        KeyCode::Char('R') => {
            if app.loader.is_none() {
                app.start_load();
            }
        }

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.board.visible().len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    let cursor = app.cursor as isize + delta;
    app.cursor = cursor.clamp(0, len as isize - 1) as usize;
}

fn toggle_row(app: &mut App) {
    if let Some(id) = app.cursor_todo_id() {
        let selected = !app.board.selection().contains(id);
        app.board.select_row(id, selected);
    }
}

fn enter_filter(app: &mut App) {
    app.filter_field = FilterField::From;
    app.filter_from_cursor = app.filter_from.len();
    app.filter_to_cursor = app.filter_to.len();
    app.mode = Mode::Filter;
}

fn enter_edit(app: &mut App) {
    let Some(id) = app.cursor_todo_id() else {
        return;
    };
    app.board.open_edit(id);
    if app.board.edit().is_open() {
        app.edit_buffer = app.board.edit().draft().to_string();
        app.edit_cursor = app.edit_buffer.len();
        app.mode = Mode::Edit;
    }
}

fn delete_row(app: &mut App) {
    if let Some(id) = app.cursor_todo_id() {
        app.board.delete_row(id);
        app.clamp_cursor();
    }
}
