//! Page button list with ellipsis collapsing

use serde::{Deserialize, Serialize};

/// One entry of the page button bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl PageItem {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageItem::Page(page) => Some(*page),
            PageItem::Ellipsis => None,
        }
    }
}

/// How many page buttons surround the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageWindow {
    /// Neighbours shown on each side of the current page
    pub siblings: usize,
    /// Up to this many pages, every page gets a button and nothing collapses
    pub collapse_threshold: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            siblings: 1,
            collapse_threshold: 7,
        }
    }
}

impl PageWindow {
    /// Builds the button list for `current` out of `total` pages.
    ///
    /// The first and last pages are always present; any gap between them and
    /// the window around `current` collapses into a single `Ellipsis`.
    /// `current` is clamped into `1..=total` and `total` is treated as at least 1.
    pub fn page_numbers(&self, current: usize, total: usize) -> Vec<PageItem> {
        let total = total.max(1);
        let current = current.clamp(1, total);

        if total <= self.collapse_threshold.max(1) {
            return (1..=total).map(PageItem::Page).collect();
        }

        let window_start = current.saturating_sub(self.siblings).max(2);
        let window_end = current.saturating_add(self.siblings).min(total - 1);

        // Never more buttons than pages, however wide the window
        let capacity = self.siblings.saturating_mul(2).saturating_add(5);
        let mut items = Vec::with_capacity(capacity.min(total));
        items.push(PageItem::Page(1));

        if window_start > 2 {
            items.push(PageItem::Ellipsis);
        }

        // window_start > window_end only when current sits on page 1 or the last
        // page with zero siblings
        if window_start <= window_end {
            items.extend((window_start..=window_end).map(PageItem::Page));
        }

        if window_end.max(1) < total - 1 {
            items.push(PageItem::Ellipsis);
        }

        items.push(PageItem::Page(total));
        items
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::PageItem::{Ellipsis, Page};
    use super::*;

    fn render(items: &[PageItem]) -> String {
        items
            .iter()
            .map(|item| match item {
                Page(page) => page.to_string(),
                Ellipsis => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[rstest]
    #[case(1, 1, "1")]
    #[case(3, 7, "1 2 3 4 5 6 7")]
    #[case(7, 10, "1 … 6 7 8 … 10")]
    #[case(1, 10, "1 2 … 10")]
    #[case(2, 10, "1 2 3 … 10")]
    #[case(3, 10, "1 2 3 4 … 10")]
    #[case(4, 10, "1 … 3 4 5 … 10")]
    #[case(5, 10, "1 … 4 5 6 … 10")]
    #[case(8, 10, "1 … 7 8 9 10")]
    #[case(10, 10, "1 … 9 10")]
    #[case(4, 8, "1 … 3 4 5 … 8")]
    fn test_default_window(#[case] current: usize, #[case] total: usize, #[case] expected: &str) {
        let window = PageWindow::default();
        assert_eq!(render(&window.page_numbers(current, total)), expected);
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        let window = PageWindow::default();
        assert_eq!(render(&window.page_numbers(0, 10)), "1 2 … 10");
        assert_eq!(render(&window.page_numbers(99, 10)), "1 … 9 10");
        assert_eq!(render(&window.page_numbers(5, 0)), "1");
    }

    #[test]
    fn test_zero_siblings() {
        let window = PageWindow {
            siblings: 0,
            collapse_threshold: 3,
        };
        assert_eq!(render(&window.page_numbers(1, 10)), "1 … 10");
        assert_eq!(render(&window.page_numbers(5, 10)), "1 … 5 … 10");
        assert_eq!(render(&window.page_numbers(10, 10)), "1 … 10");
        assert_eq!(render(&window.page_numbers(2, 10)), "1 2 … 10");
    }

    #[rstest]
    #[case(usize::MAX)]
    #[case(usize::MAX / 2 + 1)]
    #[case(1 << 40)]
    fn test_huge_window_lists_every_page(#[case] siblings: usize) {
        let window = PageWindow {
            siblings,
            collapse_threshold: 7,
        };
        assert_eq!(render(&window.page_numbers(5, 10)), "1 2 3 4 5 6 7 8 9 10");
        assert_eq!(render(&window.page_numbers(1, 10)), "1 2 3 4 5 6 7 8 9 10");
    }

    #[test]
    fn test_page_accessor() {
        assert_eq!(Page(3).page(), Some(3));
        assert_eq!(Ellipsis.page(), None);
    }

    #[rstest]
    fn test_structural_invariants_exhaustive(
        #[values(0, 1, 2, 3)] siblings: usize,
        #[values(1, 5, 7, 9)] collapse_threshold: usize,
    ) {
        let window = PageWindow {
            siblings,
            collapse_threshold,
        };

        for total in 1..=40 {
            for current in 1..=total {
                let items = window.page_numbers(current, total);

                assert!(
                    items.windows(2).all(|w| !(w[0] == Ellipsis && w[1] == Ellipsis)),
                    "adjacent ellipses for {current}/{total}: {items:?}"
                );

                let pages: Vec<usize> = items.iter().filter_map(PageItem::page).collect();
                assert!(pages.iter().all(|page| (1..=total).contains(page)));
                assert!(pages.windows(2).all(|w| w[0] < w[1]));
                assert!(pages.contains(&current));
                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&total));

                // An ellipsis always hides at least one page
                for (i, item) in items.iter().enumerate() {
                    if *item == Ellipsis {
                        let before = items[i - 1].page().unwrap_or_default();
                        let after = items[i + 1].page().unwrap_or_default();
                        assert!(after - before >= 2, "{items:?}");
                    }
                }
            }
        }
    }
}
