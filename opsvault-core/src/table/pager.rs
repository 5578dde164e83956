//! Pagination window.

/// Render-ready pagination state. Built only when more than one page
/// exists; single-page result sets show no pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total_pages: u32,
    /// Window of at most five page numbers centered on the current page.
    pub pages: Vec<u32>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// 1-based index of the first row on this page.
    pub range_start: u64,
    /// 1-based index of the last row on this page.
    pub range_end: u64,
    pub total: u64,
}

const WINDOW: u32 = 5;

impl Pager {
    /// Build the pager for one page of results, or None when everything
    /// fits on a single page.
    #[must_use]
    pub fn build(page_num: u32, total: u64, page_size: u32) -> Option<Self> {
        if page_size == 0 {
            return None;
        }
        let total_pages = u32::try_from(total.div_ceil(u64::from(page_size))).ok()?;
        if total_pages <= 1 {
            return None;
        }
        let current = page_num.clamp(1, total_pages);

        let mut start = current.saturating_sub(WINDOW / 2).max(1);
        let end = total_pages.min(start + WINDOW - 1);
        if end - start + 1 < WINDOW {
            start = end.saturating_sub(WINDOW - 1).max(1);
        }

        let range_start = u64::from(current - 1) * u64::from(page_size) + 1;
        let range_end = (u64::from(current) * u64::from(page_size)).min(total);

        Some(Self {
            current,
            total_pages,
            pages: (start..=end).collect(),
            prev_enabled: current > 1,
            next_enabled: current < total_pages,
            range_start,
            range_end,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_has_no_pager() {
        assert!(Pager::build(1, 7, 10).is_none());
        assert!(Pager::build(1, 10, 10).is_none());
        assert!(Pager::build(1, 0, 10).is_none());
    }

    #[test]
    fn window_centers_on_current_page() {
        let pager = Pager::build(4, 90, 10).unwrap();
        assert_eq!(pager.pages, [2, 3, 4, 5, 6]);
        assert!(pager.prev_enabled);
        assert!(pager.next_enabled);
    }

    #[test]
    fn window_clamps_at_the_edges() {
        let pager = Pager::build(1, 90, 10).unwrap();
        assert_eq!(pager.pages, [1, 2, 3, 4, 5]);
        assert!(!pager.prev_enabled);

        let pager = Pager::build(9, 90, 10).unwrap();
        assert_eq!(pager.pages, [5, 6, 7, 8, 9]);
        assert!(!pager.next_enabled);
    }

    #[test]
    fn short_page_counts_show_every_page() {
        let pager = Pager::build(2, 25, 10).unwrap();
        assert_eq!(pager.pages, [1, 2, 3]);
    }

    #[test]
    fn last_partial_page_ranges_correctly() {
        let pager = Pager::build(5, 47, 10).unwrap();
        assert_eq!(pager.range_start, 41);
        assert_eq!(pager.range_end, 47);
        assert_eq!(pager.total, 47);
        assert!(!pager.next_enabled);
    }
}
