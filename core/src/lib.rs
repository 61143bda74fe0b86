//! # Beankeeper Core
//!
//! Core library for Beankeeper - an attribute-driven page router.
//!
//! A [`Document`] holds pages and navigation triggers marked by class and a
//! key attribute. At startup the [`NavigationBinder`] attaches one handler to
//! every trigger and the [`PageRouter`] builds a keyed route table. Each
//! activation hides every page, reveals the matching one, moves the active
//! marker and scrolls back to the top.

// Core modules
pub mod app;
pub mod binder;
pub mod config;
pub mod dom;
pub mod error;
pub mod output;
pub mod router;

// Re-export commonly used types
pub use app::{Application, Snapshot};
pub use binder::{Bindings, ClickHandler, NavigationBinder};
pub use config::{RouterSettings, ScrollBehavior, Selectors};
pub use dom::{Document, ElementId};
pub use error::{Error, Result, RouterError};
pub use output::{DiagnosticLog, DiagnosticSink, LogLevel, LogRecord};
pub use router::{Navigation, PageKey, PageRouter, RouteTable};

/// Current version of the beankeeper-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing on stderr with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
