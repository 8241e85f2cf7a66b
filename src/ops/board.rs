use crate::model::{DateFilter, SortKey, SortState, Todo, parse_bound};

use super::edit::EditSession;
use super::selection::Selection;
use super::store::TodoStore;
use super::view;

/// The one owner of UI-facing state: store, sort, filter, selection, and
/// edit session. Every user intent is a method; each mutating method ends
/// by resyncing the selection tracker against the freshly derived visible
/// list, so readers never observe a half-updated state.
#[derive(Debug, Clone, Default)]
pub struct Board {
    store: TodoStore,
    sort: SortState,
    filter: DateFilter,
    selection: Selection,
    edit: EditSession,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    // -----------------------------------------------------------------
    // Read accessors (consumed by rendering)
    // -----------------------------------------------------------------

    /// The filtered, ordered list currently eligible for display.
    pub fn visible(&self) -> Vec<Todo> {
        view::derive(self.store.todos(), &self.filter, &self.sort)
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn filter(&self) -> DateFilter {
        self.filter
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.store.get(id)
    }

    /// Total records in the store, ignoring the filter.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // -----------------------------------------------------------------
    // Command surface
    // -----------------------------------------------------------------

    /// Replace the whole collection (fetch completion path).
    pub fn load_all(&mut self, todos: Vec<Todo>) {
        self.store.load_all(todos);
        self.resync();
    }

    pub fn sort_by_title(&mut self) {
        self.sort.toggle(SortKey::Title);
        self.resync();
    }

    pub fn sort_by_date(&mut self) {
        self.sort.toggle(SortKey::CreationDate);
        self.resync();
    }

    /// Set both filter bounds from user text. Empty or unparseable text
    /// leaves that bound unset, so filtering degrades instead of erroring.
    pub fn set_filter(&mut self, from_text: &str, to_text: &str) {
        self.filter = DateFilter {
            from: parse_bound(from_text),
            to: parse_bound(to_text),
        };
        self.resync();
    }

    pub fn reset_filter(&mut self) {
        self.filter = DateFilter::default();
        self.resync();
    }

    pub fn select_row(&mut self, id: u64, selected: bool) {
        self.selection.toggle(id, selected);
        self.resync();
    }

    /// Select or deselect everything currently visible; rows hidden by the
    /// filter keep their selection state.
    pub fn select_all(&mut self, selected: bool) {
        let visible = self.visible();
        self.selection.toggle_all(selected, &visible);
        self.resync();
    }

    /// Open the edit session for `id`, discarding any unsaved draft.
    /// Unknown ids are ignored.
    pub fn open_edit(&mut self, id: u64) {
        if let Some(todo) = self.store.get(id) {
            self.edit.open(id, &todo.description);
        }
    }

    pub fn update_draft(&mut self, text: &str) {
        self.edit.update_draft(text);
    }

    /// Commit the draft into the target record and close the session.
    /// No-op when no session is open (e.g. the target was deleted mid-edit).
    pub fn save_edit(&mut self) {
        if let Some((id, draft)) = self.edit.take() {
            self.store.update_description(id, &draft);
            self.resync();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    /// Delete a row: store, selection, and — if it was mid-edit — the edit
    /// session, which closes without saving.
    pub fn delete_row(&mut self, id: u64) {
        if self.edit.is_editing(id) {
            self.edit.cancel();
        }
        self.store.delete_by_id(id);
        self.selection.remove(id);
        self.resync();
    }

    fn resync(&mut self) {
        let visible = self.visible();
        self.selection.resync(&visible);
    }
}
