use std::collections::HashSet;

use crate::model::Todo;

/// Tracks which rows the user has checked, plus the derived state of the
/// header "select all" checkbox.
///
/// Membership is independent of the current filter: selecting rows under
/// one filter and then switching filters keeps the prior selections. Only
/// deleting a todo removes its id.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<u64>,
    all_visible_selected: bool,
}

impl Selection {
    /// Select or deselect one row. The caller resyncs afterwards.
    pub fn toggle(&mut self, id: u64, selected: bool) {
        if selected {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Select or deselect exactly the visible rows. Ids outside `visible`
    /// are untouched either way.
    pub fn toggle_all(&mut self, selected: bool, visible: &[Todo]) {
        for todo in visible {
            if selected {
                self.ids.insert(todo.id);
            } else {
                self.ids.remove(&todo.id);
            }
        }
    }

    /// Drop an id entirely (delete path).
    pub fn remove(&mut self, id: u64) {
        self.ids.remove(&id);
    }

    /// Recompute the header checkbox against the current visible list.
    /// An empty visible list is never "all selected".
    pub fn resync(&mut self, visible: &[Todo]) {
        self.all_visible_selected =
            !visible.is_empty() && visible.iter().all(|t| self.ids.contains(&t.id));
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &HashSet<u64> {
        &self.ids
    }

    pub fn all_visible_selected(&self) -> bool {
        self.all_visible_selected
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn todo(id: u64) -> Todo {
        Todo {
            id,
            title: format!("todo {}", id),
            completed: false,
            description: format!("todo {}", id),
            creation_date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_toggle_and_resync() {
        let visible = vec![todo(1), todo(2)];
        let mut sel = Selection::default();

        sel.toggle(1, true);
        sel.resync(&visible);
        assert!(!sel.all_visible_selected());

        sel.toggle(2, true);
        sel.resync(&visible);
        assert!(sel.all_visible_selected());

        sel.toggle(1, false);
        sel.resync(&visible);
        assert!(!sel.all_visible_selected());
        assert!(sel.contains(2));
    }

    #[test]
    fn test_empty_visible_is_never_all_selected() {
        let mut sel = Selection::default();
        sel.toggle(1, true);
        sel.toggle(2, true);
        sel.resync(&[]);
        assert!(!sel.all_visible_selected());
        // The set itself is untouched
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_toggle_all_leaves_hidden_ids_alone() {
        let visible = vec![todo(1), todo(2)];
        let mut sel = Selection::default();
        sel.toggle(99, true); // selected under some earlier filter

        sel.toggle_all(true, &visible);
        assert!(sel.contains(1));
        assert!(sel.contains(2));
        assert!(sel.contains(99));

        sel.toggle_all(false, &visible);
        assert!(!sel.contains(1));
        assert!(!sel.contains(2));
        assert!(sel.contains(99));
    }

    #[test]
    fn test_superset_selection_still_counts_as_all_visible() {
        let visible = vec![todo(1)];
        let mut sel = Selection::default();
        sel.toggle(1, true);
        sel.toggle(42, true);
        sel.resync(&visible);
        assert!(sel.all_visible_selected());
    }
}
