//! Pagination state for list views
//!
//! Owns the page, the page size and the total item count, and derives every
//! display value from those three. All mutations clamp into range instead of
//! failing, so a stray click can never leave the view on a page that does not
//! exist.

use serde::{Deserialize, Serialize};

use super::page_numbers::{PageItem, PageWindow};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Messages that can be sent to update the pagination state
///
/// Following Elm conventions, messages are named in past tense
/// to indicate "what happened" rather than "what to do"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The backing collection (after filtering) now holds this many items
    TotalItemsChanged(usize),
    PageSizeChanged(usize),
    /// A page was picked directly; any integer is accepted and clamped
    PageRequested(i64),
    NextPageRequested,
    PreviousPageRequested,
    FirstPageRequested,
    LastPageRequested,
}

/// The page sizes a view offers in its size dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct PageSizeOptions(Vec<usize>);

impl Default for PageSizeOptions {
    fn default() -> Self {
        Self(vec![5, 10, 20, 25, 50, 100])
    }
}

impl From<Vec<usize>> for PageSizeOptions {
    fn from(sizes: Vec<usize>) -> Self {
        Self::new(sizes)
    }
}

impl From<PageSizeOptions> for Vec<usize> {
    fn from(options: PageSizeOptions) -> Self {
        options.0
    }
}

impl PageSizeOptions {
    /// Zero sizes are dropped; an empty set allows any positive size
    pub fn new(sizes: impl IntoIterator<Item = usize>) -> Self {
        let mut sizes: Vec<usize> = sizes.into_iter().filter(|size| *size > 0).collect();
        sizes.sort_unstable();
        sizes.dedup();
        Self(sizes)
    }

    pub fn sizes(&self) -> &[usize] {
        &self.0
    }

    /// Nearest allowed size; ties go to the smaller size
    pub fn snap(&self, requested: usize) -> usize {
        let requested = requested.max(1);
        self.0
            .iter()
            .copied()
            .min_by_key(|size| (size.abs_diff(requested), *size))
            .unwrap_or(requested)
    }

    /// The next allowed size above `current`, or `current` at the top
    pub fn larger(&self, current: usize) -> usize {
        self.0
            .iter()
            .copied()
            .find(|size| *size > current)
            .unwrap_or(current)
    }

    /// The next allowed size below `current`, or `current` at the bottom
    pub fn smaller(&self, current: usize) -> usize {
        self.0
            .iter()
            .rev()
            .copied()
            .find(|size| *size < current)
            .unwrap_or(current)
    }
}

/// Construction parameters; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    pub initial_page: Option<i64>,
    pub initial_page_size: Option<usize>,
    pub page_sizes: PageSizeOptions,
    pub window: PageWindow,
}

/// Read-only view of the pagination state with every derived value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSnapshot {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// Manages page / page size / total state for one list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: usize,
    total_items: usize,
    page_sizes: PageSizeOptions,
    window: PageWindow,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationState {
    /// Page 1 with the default page size and no items
    pub fn new() -> Self {
        Self::with_options(PaginationOptions::default())
    }

    pub fn with_options(options: PaginationOptions) -> Self {
        let page_size = options
            .page_sizes
            .snap(options.initial_page_size.unwrap_or(DEFAULT_PAGE_SIZE));
        let mut state = Self {
            current_page: 1,
            page_size,
            total_items: 0,
            page_sizes: options.page_sizes,
            window: options.window,
        };
        state.set_current_page(options.initial_page.unwrap_or(1));
        state
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_sizes(&self) -> &PageSizeOptions {
        &self.page_sizes
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Never less than 1, even for an empty collection
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn start_index(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    pub fn end_index(&self) -> usize {
        (self.start_index() + self.page_size).min(self.total_items)
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn snapshot(&self) -> PaginationSnapshot {
        PaginationSnapshot {
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages(),
            start_index: self.start_index(),
            end_index: self.end_index(),
            has_previous_page: self.has_previous_page(),
            has_next_page: self.has_next_page(),
        }
    }

    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp_current_page();
    }

    /// Keeps the current page unless it no longer exists
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = self.page_sizes.snap(page_size);
        self.clamp_current_page();
    }

    pub fn set_current_page(&mut self, page: i64) {
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        self.current_page = page.min(self.total_pages());
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.current_page -= 1;
        }
    }

    pub fn go_to_first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn go_to_last_page(&mut self) {
        self.current_page = self.total_pages();
    }

    /// Page buttons for the current position, see [`PageWindow::page_numbers`]
    pub fn page_numbers(&self) -> Vec<PageItem> {
        self.window
            .page_numbers(self.current_page, self.total_pages())
    }

    /// The current page's slice of `items`.
    ///
    /// `items` stays owned by the caller, who must keep `total_items` in sync
    /// with it; a shorter slice yields a shorter (possibly empty) page.
    pub fn paginate<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_index().min(items.len());
        let start = self.start_index().min(end);
        &items[start..end]
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::TotalItemsChanged(total_items) => self.set_total_items(total_items),
            Message::PageSizeChanged(page_size) => self.set_page_size(page_size),
            Message::PageRequested(page) => self.set_current_page(page),
            Message::NextPageRequested => self.next_page(),
            Message::PreviousPageRequested => self.previous_page(),
            Message::FirstPageRequested => self.go_to_first_page(),
            Message::LastPageRequested => self.go_to_last_page(),
        }
    }

    fn clamp_current_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }
}
