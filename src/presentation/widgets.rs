//! Reusable list view widgets
//!
//! Widgets are built fresh from state on every frame and hold only borrows.

pub mod list_table;
pub mod pager;
pub mod search_bar;
pub mod status_bar;

pub use list_table::ListTableWidget;
pub use pager::PagerWidget;
pub use search_bar::SearchBarWidget;
pub use status_bar::StatusBarWidget;
