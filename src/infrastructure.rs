//! Infrastructure layer
//!
//! This module handles everything with side effects:
//! - TUI foundation
//! - CLI argument processing and configuration
//! - List backends and the command executor

pub mod cli;
pub mod cmd_executor;
pub mod config;
pub mod source;
pub mod tui;
