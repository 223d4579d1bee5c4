use crate::domain::Listable;

pub mod filter;
pub mod list;
pub mod page_numbers;
pub mod pagination;
pub mod search;
pub mod selection;

pub use filter::ListFilter;
pub use list::{ListOptions, ListState, PagingMode};
pub use page_numbers::{PageItem, PageWindow};
pub use pagination::{PageSizeOptions, PaginationOptions, PaginationSnapshot, PaginationState};
pub use search::DebouncedSearch;
pub use selection::SelectionState;

/// State of the list browser: one list view plus the chrome around it
#[derive(Debug, Clone)]
pub struct AppState<T> {
    pub list: ListState<T>,
    pub title: String,
    pub status_message: Option<String>,
    /// Keystrokes go to the search box instead of the key bindings
    pub search_focused: bool,
    pub should_quit: bool,
}

impl<T: Listable> AppState<T> {
    pub fn new(title: impl Into<String>, list: ListState<T>) -> Self {
        Self {
            list,
            title: title.into(),
            status_message: None,
            search_focused: false,
            should_quit: false,
        }
    }
}
