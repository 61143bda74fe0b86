//! CLI-specific output implementations
//!
//! Terminal rendering of core diagnostics and navigation state.

pub mod console;

pub use console::{print_snapshot, ConsoleSink};
