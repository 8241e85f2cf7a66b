/// Draft state for the single todo being description-edited, if any.
/// Opening a new session discards any unsaved previous draft —
/// last-open-wins, no merge, no warning.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    target_id: Option<u64>,
    draft: String,
}

impl EditSession {
    /// Open a session for a todo, seeding the draft with its current
    /// description.
    pub fn open(&mut self, id: u64, description: &str) {
        self.target_id = Some(id);
        self.draft = description.to_string();
    }

    /// Replace the draft text. Nothing is persisted until the save path
    /// consumes the session.
    pub fn update_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Consume the pending commit, clearing the session. `None` when no
    /// session is open.
    pub fn take(&mut self) -> Option<(u64, String)> {
        let id = self.target_id.take()?;
        Some((id, std::mem::take(&mut self.draft)))
    }

    /// Close without committing.
    pub fn cancel(&mut self) {
        self.target_id = None;
        self.draft.clear();
    }

    pub fn target_id(&self) -> Option<u64> {
        self.target_id
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.target_id.is_some()
    }

    pub fn is_editing(&self, id: u64) -> bool {
        self.target_id == Some(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_draft() {
        let mut edit = EditSession::default();
        edit.open(3, "walk the dog");
        assert!(edit.is_editing(3));
        assert_eq!(edit.draft(), "walk the dog");
    }

    #[test]
    fn test_take_clears_session() {
        let mut edit = EditSession::default();
        edit.open(3, "walk the dog");
        edit.update_draft("walk both dogs");

        assert_eq!(edit.take(), Some((3, "walk both dogs".to_string())));
        assert!(!edit.is_open());
        assert_eq!(edit.take(), None);
    }

    #[test]
    fn test_reopen_discards_previous_draft() {
        let mut edit = EditSession::default();
        edit.open(1, "first");
        edit.update_draft("first, halfway rewritten");

        edit.open(2, "second");
        assert!(edit.is_editing(2));
        assert_eq!(edit.draft(), "second");
    }

    #[test]
    fn test_cancel_discards() {
        let mut edit = EditSession::default();
        edit.open(1, "text");
        edit.cancel();
        assert!(!edit.is_open());
        assert_eq!(edit.take(), None);
    }
}
