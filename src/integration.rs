//! Integration layer
//!
//! Wires the pure core to its side effects:
//! - The list runtime (update loop plus command execution)
//! - The app runner (terminal events in, frames out)

pub mod app_runner;
pub mod runtime;
