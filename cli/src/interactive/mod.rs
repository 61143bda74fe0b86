//! Interactive terminal mode
//!
//! Renders the document with iocraft: a header, the navigation bar, the
//! visible page and a status line with the latest diagnostic.

pub mod app;
pub mod components;
pub mod content;
pub mod handle;
pub mod text_utils;

pub use app::run_interactive;
pub use handle::AppHandle;
