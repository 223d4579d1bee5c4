//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - The list view component
//! - Reusable widgets (table, pager, search bar, status bar)

pub mod components;
pub mod widgets;
