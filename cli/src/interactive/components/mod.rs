//! UI components for interactive mode

pub mod logo;
pub mod nav_bar;
pub mod page_view;
pub mod status_line;

pub use logo::BeankeeperLogo;
pub use nav_bar::NavBar;
pub use page_view::PageBody;
pub use status_line::StatusLine;
