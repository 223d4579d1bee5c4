//! # Mentorlist - paginated list views for a mentorship marketplace
//!
//! The list engine behind the marketplace's tables (users, opportunities,
//! applications, discussions, audit logs, saved opportunities): page number
//! windows, debounced search, facet filters, client- or server-side paging
//! and optimistic deletes. A terminal browser is built on top of it.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): the state of one mounted list view
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (fetches, mutations)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use mentorlist::core::{
//!     cmd::RequestId,
//!     msg::{ListMsg, LoadedPage},
//!     state::{ListState, PageItem},
//! };
//! use mentorlist::test_helpers::users;
//!
//! let mut list = ListState::default();
//! list.update(ListMsg::RefreshRequested);
//! list.update(ListMsg::Loaded {
//!     request: RequestId(1),
//!     page: LoadedPage::all(users(100)),
//! });
//! list.update(ListMsg::PageRequested(7));
//!
//! let pagination = list.pagination();
//! assert_eq!(pagination.start_index(), 60);
//! assert_eq!(
//!     pagination.page_numbers(),
//!     vec![
//!         PageItem::Page(1),
//!         PageItem::Ellipsis,
//!         PageItem::Page(6),
//!         PageItem::Page(7),
//!         PageItem::Page(8),
//!         PageItem::Ellipsis,
//!         PageItem::Page(10),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, commands and the update function
//! - [`domain`] - Marketplace records and the traits the engine needs from them
//! - [`infrastructure`] - Terminal, configuration, backends and command execution
//! - [`integration`] - Runtime loop tying the core to its side effects
//! - [`presentation`] - Widgets and components
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
/// Fixture records shared by unit tests, integration tests and benches
#[doc(hidden)]
pub mod test_helpers;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
