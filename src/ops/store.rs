use crate::model::Todo;

/// Authoritative in-memory todo collection. All mutation is
/// replace-or-nothing: `load_all` swaps the whole collection, the
/// per-record operations either fully apply or do nothing.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Replace the entire collection. Used once per fetch.
    pub fn load_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Remove the record with `id`. Returns whether one existed — unknown
    /// ids are a silent no-op, since deletes can race against each other.
    pub fn delete_by_id(&mut self, id: u64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    /// Overwrite the record's description — and its title, which the edit
    /// panel updates in lockstep. Unknown ids are a silent no-op.
    pub fn update_description(&mut self, id: u64, text: &str) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.description = text.to_string();
            todo.title = text.to_string();
        }
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn todo(id: u64, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed: false,
            description: title.to_string(),
            creation_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_load_all_replaces_wholesale() {
        let mut store = TodoStore::default();
        store.load_all(vec![todo(1, "a"), todo(2, "b")]);
        assert_eq!(store.len(), 2);

        store.load_all(vec![todo(3, "c")]);
        assert_eq!(store.len(), 1);
        assert!(store.get(1).is_none());
        assert!(store.get(3).is_some());
    }

    #[test]
    fn test_delete_by_id() {
        let mut store = TodoStore::default();
        store.load_all(vec![todo(1, "a"), todo(2, "b")]);

        assert!(store.delete_by_id(1));
        assert_eq!(store.len(), 1);
        // Second delete of the same id is a no-op
        assert!(!store.delete_by_id(1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_description_also_updates_title() {
        let mut store = TodoStore::default();
        store.load_all(vec![todo(1, "original")]);

        store.update_description(1, "rewritten");
        let t = store.get(1).unwrap();
        assert_eq!(t.description, "rewritten");
        assert_eq!(t.title, "rewritten");
    }

    #[test]
    fn test_update_description_unknown_id_is_noop() {
        let mut store = TodoStore::default();
        store.load_all(vec![todo(1, "original")]);
        store.update_description(99, "rewritten");
        assert_eq!(store.get(1).unwrap().description, "original");
    }
}
