//! Core Elm Architecture implementation
//!
//! Everything here is synchronous and free of I/O:
//! - Pagination, search and filter state
//! - Messages and commands
//! - Key translation and the update function of the list browser

pub mod cmd;
pub mod msg;
pub mod state;
pub mod translator;
pub mod update;
