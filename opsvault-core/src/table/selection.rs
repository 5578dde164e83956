//! Row selection bookkeeping.
//!
//! The table reports selection changes as events carrying row identities;
//! the selected set itself lives with the session controller so it can
//! survive re-renders and drive batch actions.

use std::collections::BTreeSet;

/// A selection change reported by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Header checkbox toggled. `ids` carries every row on the current
    /// page when checking; unchecking clears the whole set.
    All { checked: bool, ids: Vec<i64> },
    /// One row toggled.
    Single { checked: bool, id: i64 },
}

/// Apply one event to the selected set.
pub fn apply(selected: &mut BTreeSet<i64>, event: &SelectionEvent) {
    match event {
        SelectionEvent::All { checked: true, ids } => {
            selected.extend(ids.iter().copied());
        }
        SelectionEvent::All { checked: false, .. } => {
            selected.clear();
        }
        SelectionEvent::Single { checked: true, id } => {
            selected.insert(*id);
        }
        SelectionEvent::Single { checked: false, id } => {
            selected.remove(id);
        }
    }
}

/// Whether the header checkbox should render checked: every row on the
/// current page is selected (and the page is non-empty).
#[must_use]
pub fn all_checked(page_ids: &[i64], selected: &BTreeSet<i64>) -> bool {
    !page_ids.is_empty() && page_ids.iter().all(|id| selected.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_then_uncheck_one() {
        let mut selected = BTreeSet::new();
        apply(
            &mut selected,
            &SelectionEvent::All {
                checked: true,
                ids: vec![1, 2, 3],
            },
        );
        assert_eq!(selected.len(), 3);
        assert!(all_checked(&[1, 2, 3], &selected));

        apply(
            &mut selected,
            &SelectionEvent::Single {
                checked: false,
                id: 2,
            },
        );
        assert!(!all_checked(&[1, 2, 3], &selected));
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn uncheck_all_clears_everything() {
        let mut selected: BTreeSet<i64> = [1, 2, 9].into_iter().collect();
        apply(
            &mut selected,
            &SelectionEvent::All {
                checked: false,
                ids: vec![1, 2],
            },
        );
        assert!(selected.is_empty());
    }

    #[test]
    fn empty_page_is_never_all_checked() {
        assert!(!all_checked(&[], &BTreeSet::new()));
    }
}
