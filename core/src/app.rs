//! Application facade
//!
//! Owns the document and everything discovered from it at startup, and
//! routes activations through the bound handlers.

use crate::binder::{Bindings, NavigationBinder};
use crate::config::RouterSettings;
use crate::dom::{Document, ElementId, Viewport};
use crate::error::{Result, RouterResult};
use crate::output::{DiagnosticLog, LogRecord};
use crate::router::{Navigation, PageKey, PageRouter, RouteTable};
use serde::{Deserialize, Serialize};

/// Startup banner
pub const BREWING_MESSAGE: &str = "☕ Beankeeper is brewing...";

/// Serializable view of the application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Keys of visible pages, in document order
    pub visible_pages: Vec<PageKey>,
    /// Keys of triggers carrying the active class, in document order
    pub active_triggers: Vec<PageKey>,
    pub viewport: Viewport,
    pub last_diagnostic: Option<LogRecord>,
}

/// A running page application
#[derive(Debug)]
pub struct Application {
    document: Document,
    router: PageRouter,
    bindings: Bindings,
    settings: RouterSettings,
    log: DiagnosticLog,
}

impl Application {
    /// Discover pages and bind triggers. Nothing is navigated yet.
    pub fn new(document: Document, settings: RouterSettings) -> Result<Self> {
        Self::with_log(document, settings, DiagnosticLog::default())
    }

    /// Like [`Application::new`] but writing diagnostics to `log`
    pub fn with_log(
        document: Document,
        settings: RouterSettings,
        mut log: DiagnosticLog,
    ) -> Result<Self> {
        settings.validate()?;

        let table = RouteTable::discover(&document, &settings.selectors, &mut log);
        let bindings = NavigationBinder::new(&settings.selectors).bind(&document, &mut log);
        let router = PageRouter::new(table, &settings);

        Ok(Self {
            document,
            router,
            bindings,
            settings,
            log,
        })
    }

    /// Parse `markup` and build an application from it
    pub fn from_markup(markup: &str, settings: RouterSettings) -> Result<Self> {
        let document = Document::parse(markup)?;
        Self::new(document, settings)
    }

    /// Announce startup and show the default page
    pub fn start(&mut self) -> RouterResult<Navigation> {
        self.log.info(BREWING_MESSAGE);
        let default_page = self.settings.default_page.clone();
        self.navigate(&default_page)
    }

    /// Show the page keyed `key`.
    ///
    /// An unknown key is logged as an error and leaves no page visible.
    pub fn navigate(&mut self, key: &str) -> RouterResult<Navigation> {
        self.navigate_labeled(key, None)
    }

    /// Navigate and log `label`, falling back to the marked trigger's text
    /// and then to the key
    fn navigate_labeled(&mut self, key: &str, label: Option<String>) -> RouterResult<Navigation> {
        match self.router.navigate(&mut self.document, key) {
            Ok(navigation) => {
                let label = label
                    .filter(|label| !label.is_empty())
                    .or_else(|| {
                        navigation
                            .trigger
                            .map(|trigger| self.document.text_content(trigger))
                    })
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| navigation.page.to_string());
                self.log.info(format!("Navigated to: {}", label));
                Ok(navigation)
            }
            Err(err) => {
                self.log.error(err.to_string());
                Err(err)
            }
        }
    }

    /// Activate `trigger`. Returns `None` when no handler is bound to it.
    pub fn click(&mut self, trigger: ElementId) -> Option<RouterResult<Navigation>> {
        let handler = self.bindings.handler(trigger)?;
        let key = handler.key.clone();
        let label = handler.label.clone();
        Some(self.navigate_labeled(key.as_str(), Some(label)))
    }

    /// Scroll the viewport by `delta` rows, never past `max_y`
    pub fn scroll_by(&mut self, delta: i64, max_y: u32) {
        self.document.scroll_by(delta, max_y);
    }

    /// Current visibility, active markers and viewport
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            visible_pages: self.visible_pages(),
            active_triggers: self.active_triggers(),
            viewport: self.document.viewport(),
            last_diagnostic: self.log.last().cloned(),
        }
    }

    /// Keys of visible page elements, in document order. Every element with
    /// the page class counts; keyless pages report an empty key.
    pub fn visible_pages(&self) -> Vec<PageKey> {
        self.visible_page_elements()
            .into_iter()
            .map(|page| self.key_of(page))
            .collect()
    }

    /// Keys of trigger elements carrying the active class, in document order
    pub fn active_triggers(&self) -> Vec<PageKey> {
        self.active_trigger_elements()
            .into_iter()
            .map(|trigger| self.key_of(trigger))
            .collect()
    }

    /// Page elements not hidden, including duplicates and keyless ones
    pub fn visible_page_elements(&self) -> Vec<ElementId> {
        self.router
            .table()
            .page_elements()
            .iter()
            .copied()
            .filter(|page| !self.document.is_hidden(*page))
            .collect()
    }

    /// Trigger elements carrying the active class
    pub fn active_trigger_elements(&self) -> Vec<ElementId> {
        let active_class = self.router.active_class();
        self.router
            .table()
            .button_elements()
            .iter()
            .copied()
            .filter(|trigger| self.document.has_class(*trigger, active_class))
            .collect()
    }

    fn key_of(&self, element: ElementId) -> PageKey {
        self.document
            .attribute(element, &self.settings.selectors.key_attribute)
            .map(PageKey::from)
            .unwrap_or_default()
    }

    /// Element of the visible page
    pub fn visible_page_element(&self) -> Option<ElementId> {
        self.router
            .current_page()
            .and_then(|key| self.router.table().page(key.as_str()))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn router(&self) -> &PageRouter {
        &self.router
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }

    pub fn log(&self) -> &DiagnosticLog {
        &self.log
    }
}
