//! Router module for switching the visible page
//!
//! This module provides the keyed route table, the mutation surface the
//! router drives, and the page router itself.

pub mod route;
#[allow(clippy::module_inception)]
pub mod router;
pub mod surface;

// Re-export commonly used types
pub use route::{PageKey, RouteTable};
pub use router::{Navigation, PageRouter, RouterState};
pub use surface::PageSurface;
