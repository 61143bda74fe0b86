//! Shareable handle to the running application
//!
//! The UI reads a [`PageView`] for every render and sends activations and
//! scroll requests back through the handle.

use super::content::{layout_lines, page_blocks, StyledLine};
use beankeeper_core::{Application, LogRecord, Navigation, RouterError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A navigation trigger as shown in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavItem {
    pub key: String,
    pub label: String,
    pub active: bool,
}

/// Everything the UI draws for one frame
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub title: String,
    pub nav: Vec<NavItem>,
    /// Wrapped lines of the visible page
    pub lines: Vec<StyledLine>,
    /// First line shown
    pub scroll: usize,
    pub status: Option<LogRecord>,
}

/// A shareable, UI-friendly handle to the application
#[derive(Clone)]
pub struct AppHandle(Arc<Mutex<Application>>);

impl AppHandle {
    pub fn new(app: Application) -> Self {
        Self(Arc::new(Mutex::new(app)))
    }

    fn lock(&self) -> MutexGuard<'_, Application> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of bound triggers
    pub fn trigger_count(&self) -> usize {
        self.lock().bindings().len()
    }

    /// Index of the first trigger carrying the active marker
    pub fn active_index(&self) -> Option<usize> {
        let app = self.lock();
        let active_class = app.router().active_class().to_string();
        app.bindings()
            .handlers()
            .iter()
            .position(|h| app.document().has_class(h.trigger, &active_class))
    }

    /// Activate the n-th trigger. `None` when there is no such trigger.
    pub fn activate(&self, index: usize) -> Option<Result<Navigation, RouterError>> {
        let mut app = self.lock();
        let trigger = app.bindings().nth(index)?.trigger;
        app.click(trigger)
    }

    /// Scroll the visible page by `delta` lines for a page `width` columns
    /// wide and `height` rows tall
    pub fn scroll_by(&self, delta: i64, width: usize, height: usize) {
        let mut app = self.lock();
        let total = app
            .visible_page_element()
            .map(|page| layout_lines(&page_blocks(app.document(), page), width).len())
            .unwrap_or(0);
        let max_y = total.saturating_sub(height);
        app.scroll_by(delta, u32::try_from(max_y).unwrap_or(u32::MAX));
    }

    /// Build the frame for a page area `width` columns wide
    pub fn view(&self, width: usize) -> PageView {
        let app = self.lock();
        let document = app.document();
        let active_class = app.router().active_class();

        let nav = app
            .bindings()
            .handlers()
            .iter()
            .map(|h| NavItem {
                key: h.key.to_string(),
                label: if h.label.is_empty() { h.key.to_string() } else { h.label.clone() },
                active: document.has_class(h.trigger, active_class),
            })
            .collect();

        let lines = app
            .visible_page_element()
            .map(|page| layout_lines(&page_blocks(document, page), width))
            .unwrap_or_default();

        PageView {
            title: document.title().unwrap_or_else(|| "Beankeeper".to_string()),
            nav,
            lines,
            scroll: document.viewport().y as usize,
            status: app.log().last().cloned(),
        }
    }
}
