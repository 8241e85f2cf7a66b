use unicode_segmentation::UnicodeSegmentation;

/// Byte offset of the grapheme boundary before `cursor` (0 at the start).
pub(super) fn prev_boundary(text: &str, cursor: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i < cursor)
        .last()
        .unwrap_or(0)
}

/// Byte offset of the grapheme boundary after `cursor` (len at the end).
pub(super) fn next_boundary(text: &str, cursor: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, g)| i + g.len())
        .find(|&end| end > cursor)
        .unwrap_or(text.len())
}

/// Insert `c` at the byte cursor, returning the new cursor.
pub(super) fn insert_char(text: &mut String, cursor: usize, c: char) -> usize {
    text.insert(cursor, c);
    cursor + c.len_utf8()
}

/// Remove the grapheme ending at the cursor, returning the new cursor.
pub(super) fn delete_back(text: &mut String, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }
    let start = prev_boundary(text, cursor);
    text.replace_range(start..cursor, "");
    start
}

/// Remove the grapheme starting at the cursor.
pub(super) fn delete_forward(text: &mut String, cursor: usize) {
    if cursor >= text.len() {
        return;
    }
    let end = next_boundary(text, cursor);
    text.replace_range(cursor..end, "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_respect_multibyte() {
        let text = "a\u{00E9}b"; // a é b
        assert_eq!(prev_boundary(text, text.len()), 3);
        assert_eq!(prev_boundary(text, 3), 1);
        assert_eq!(next_boundary(text, 1), 3);
        assert_eq!(next_boundary(text, text.len()), text.len());
    }

    #[test]
    fn test_insert_and_delete_round_trip() {
        let mut text = String::from("ab");
        let cursor = insert_char(&mut text, 1, 'x');
        assert_eq!(text, "axb");
        assert_eq!(cursor, 2);

        let cursor = delete_back(&mut text, cursor);
        assert_eq!(text, "ab");
        assert_eq!(cursor, 1);

        delete_forward(&mut text, cursor);
        assert_eq!(text, "a");
    }

    #[test]
    fn test_delete_at_edges_is_noop() {
        let mut text = String::from("ab");
        assert_eq!(delete_back(&mut text, 0), 0);
        delete_forward(&mut text, 2);
        assert_eq!(text, "ab");
    }
}
