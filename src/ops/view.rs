use std::cmp::Ordering;

use crate::model::{DateFilter, SortDirection, SortKey, SortState, Todo};

/// Derive the visible list: apply the date filter, then stable-sort by the
/// active key. Pure — inputs are never mutated, and identical inputs yield
/// identical output.
pub fn derive(todos: &[Todo], filter: &DateFilter, sort: &SortState) -> Vec<Todo> {
    let mut result: Vec<Todo> = if filter.is_active() {
        todos
            .iter()
            .filter(|t| filter.contains(t.creation_date))
            .cloned()
            .collect()
    } else {
        todos.to_vec()
    };

    // Vec::sort_by is stable, and reversing an Ordering keeps Equal as
    // Equal, so ties retain their original relative order in both
    // directions.
    result.sort_by(|a, b| {
        let cmp = match sort.key {
            SortKey::Title => title_cmp(&a.title, &b.title),
            SortKey::CreationDate => a.creation_date.cmp(&b.creation_date),
        };
        match sort.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });

    result
}

/// Order titles the way a person reads them: case-insensitively, with
/// punctuation only breaking ties. Three strengths — lowercased
/// alphanumerics, lowercased text, raw text — so the result is still a
/// total order.
pub fn title_cmp(a: &str, b: &str) -> Ordering {
    alnum_lower(a)
        .cmp(&alnum_lower(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn alnum_lower(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn todo(id: u64, title: &str, month: u32, day: u32) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed: false,
            description: title.to_string(),
            creation_date: Utc.with_ymd_and_hms(2024, month, day, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_no_filter_preserves_every_element() {
        let todos = vec![todo(1, "b", 2, 1), todo(2, "a", 3, 1), todo(3, "c", 1, 1)];
        let out = derive(&todos, &DateFilter::default(), &SortState::default());
        assert_eq!(out.len(), todos.len());
        let mut ids: Vec<u64> = out.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let todos = vec![
            todo(1, "jan", 1, 15),
            todo(2, "feb", 2, 1),
            todo(3, "mid feb", 2, 15),
            todo(4, "mar", 3, 1),
            todo(5, "apr", 4, 1),
        ];
        let filter = DateFilter {
            from: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        };
        let out = derive(&todos, &filter, &SortState::default());
        let ids: Vec<u64> = out.iter().map(|t| t.id).collect();
        // Both boundary dates are kept, everything outside is dropped
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_half_open_filter() {
        let todos = vec![todo(1, "jan", 1, 15), todo(2, "may", 5, 15)];
        let from_only = DateFilter {
            from: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            to: None,
        };
        let out = derive(&todos, &from_only, &SortState::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn test_title_sort_descending_reverses_distinct_titles() {
        let todos = vec![
            todo(1, "pear", 1, 1),
            todo(2, "apple", 2, 1),
            todo(3, "mango", 3, 1),
        ];
        let asc = SortState {
            key: SortKey::Title,
            direction: SortDirection::Asc,
        };
        let desc = SortState {
            key: SortKey::Title,
            direction: SortDirection::Desc,
        };
        let up: Vec<u64> = derive(&todos, &DateFilter::default(), &asc)
            .iter()
            .map(|t| t.id)
            .collect();
        let down: Vec<u64> = derive(&todos, &DateFilter::default(), &desc)
            .iter()
            .map(|t| t.id)
            .collect();
        let mut reversed = up.clone();
        reversed.reverse();
        assert_eq!(down, reversed);
    }

    #[test]
    fn test_equal_titles_keep_original_order_in_both_directions() {
        let todos = vec![
            todo(10, "same", 3, 1),
            todo(11, "same", 1, 1),
            todo(12, "same", 2, 1),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sort = SortState {
                key: SortKey::Title,
                direction,
            };
            let ids: Vec<u64> = derive(&todos, &DateFilter::default(), &sort)
                .iter()
                .map(|t| t.id)
                .collect();
            assert_eq!(ids, vec![10, 11, 12], "direction {:?}", direction);
        }
    }

    #[test]
    fn test_date_sort_ties_are_stable() {
        let same_day = vec![todo(5, "b", 2, 2), todo(6, "a", 2, 2), todo(7, "c", 2, 2)];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sort = SortState {
                key: SortKey::CreationDate,
                direction,
            };
            let ids: Vec<u64> = derive(&same_day, &DateFilter::default(), &sort)
                .iter()
                .map(|t| t.id)
                .collect();
            assert_eq!(ids, vec![5, 6, 7]);
        }
    }

    #[test]
    fn test_derive_does_not_mutate_input() {
        let todos = vec![todo(1, "b", 2, 1), todo(2, "a", 1, 1)];
        let before = todos.clone();
        let _ = derive(
            &todos,
            &DateFilter::default(),
            &SortState {
                key: SortKey::Title,
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(todos, before);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let out = derive(&[], &DateFilter::default(), &SortState::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_title_cmp_ignores_case_at_primary_strength() {
        // Code-point order would put every uppercase title first; human
        // order interleaves them.
        assert_eq!(title_cmp("Banana", "apple"), Ordering::Greater);
        assert_eq!(title_cmp("apple", "BANANA"), Ordering::Less);
        // Same letters, different case: still a deterministic total order
        assert_eq!(title_cmp("Apple", "apple"), Ordering::Less);
    }

    #[test]
    fn test_title_cmp_punctuation_breaks_ties_only() {
        // "e-mail" sorts next to "email", not in front of "apple"
        assert_eq!(title_cmp("e-mail", "apple"), Ordering::Greater);
        assert_eq!(title_cmp("e-mail", "friend"), Ordering::Less);
        assert_eq!(title_cmp("#1 task", "1 task"), Ordering::Less);
        // Identical letters, different punctuation: not Equal
        assert_ne!(title_cmp("e-mail", "email"), Ordering::Equal);
    }
}
