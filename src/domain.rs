//! Domain logic
//!
//! This module contains the marketplace records and the abstractions the list
//! engine uses to search and filter them:
//! - Records shown by each list view
//! - The `Listable` and `TableRow` traits
//! - The kinds of list screens

pub mod listing;
pub mod records;
pub mod views;

pub use listing::{Facet, Listable, TableRow};
pub use views::ViewKind;
