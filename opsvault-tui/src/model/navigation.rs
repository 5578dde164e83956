//! Left navigation panel state.

use opsvault_core::PageKind;

/// One entry in the navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Page(PageKind),
    Logout,
}

pub struct NavigationState {
    pub items: Vec<NavEntry>,
    pub selected: usize,
}

impl NavigationState {
    /// Build the list with `current` preselected.
    #[must_use]
    pub fn new(current: PageKind) -> Self {
        let items: Vec<NavEntry> = PageKind::ALL
            .into_iter()
            .map(NavEntry::Page)
            .chain(std::iter::once(NavEntry::Logout))
            .collect();
        let selected = items
            .iter()
            .position(|e| *e == NavEntry::Page(current))
            .unwrap_or(0);
        Self { items, selected }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    #[must_use]
    pub fn current(&self) -> NavEntry {
        self.items[self.selected]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_clamps_at_both_ends() {
        let mut nav = NavigationState::new(PageKind::Accounts);
        nav.select_previous();
        assert_eq!(nav.selected, 0);
        nav.select_last();
        assert_eq!(nav.current(), NavEntry::Logout);
        nav.select_next();
        assert_eq!(nav.current(), NavEntry::Logout);
    }

    #[test]
    fn preselects_the_current_page() {
        let nav = NavigationState::new(PageKind::Secrets);
        assert_eq!(nav.current(), NavEntry::Page(PageKind::Secrets));
    }
}
