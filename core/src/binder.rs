//! Navigation binder
//!
//! Finds every navigation trigger in the document and registers one click
//! handler for it. A handler only knows the key it navigates to; dispatching
//! it is up to [`crate::Application`].

use crate::config::Selectors;
use crate::dom::{Document, ElementId};
use crate::output::DiagnosticLog;
use crate::router::PageKey;
use std::collections::HashMap;
use tracing::debug;

/// Click handler attached to one trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickHandler {
    pub trigger: ElementId,
    /// Key read from the trigger's key attribute
    pub key: PageKey,
    /// Trimmed text of the trigger
    pub label: String,
}

/// Handlers registered by [`NavigationBinder::bind`]
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    handlers: Vec<ClickHandler>,
    index: HashMap<ElementId, usize>,
}

impl Bindings {
    /// Handler attached to `trigger`
    pub fn handler(&self, trigger: ElementId) -> Option<&ClickHandler> {
        self.index.get(&trigger).map(|i| &self.handlers[*i])
    }

    /// Handlers in document order
    pub fn handlers(&self) -> &[ClickHandler] {
        &self.handlers
    }

    /// The n-th handler in document order
    pub fn nth(&self, n: usize) -> Option<&ClickHandler> {
        self.handlers.get(n)
    }

    /// First handler navigating to `key`
    pub fn for_key(&self, key: &str) -> Option<&ClickHandler> {
        self.handlers.iter().find(|h| h.key.as_str() == key)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn register(&mut self, handler: ClickHandler) {
        // One handler per trigger
        if self.index.contains_key(&handler.trigger) {
            return;
        }
        self.index.insert(handler.trigger, self.handlers.len());
        self.handlers.push(handler);
    }
}

/// Wires navigation triggers to page keys
pub struct NavigationBinder<'a> {
    selectors: &'a Selectors,
}

impl<'a> NavigationBinder<'a> {
    pub fn new(selectors: &'a Selectors) -> Self {
        Self { selectors }
    }

    /// Register a handler for every keyed trigger in `document`
    pub fn bind(&self, document: &Document, log: &mut DiagnosticLog) -> Bindings {
        let mut bindings = Bindings::default();

        for (trigger, key) in
            document.keyed_elements(&self.selectors.nav_class, &self.selectors.key_attribute)
        {
            let Some(key) = key else {
                log.warning(format!(
                    "Navigation trigger {} has no {} attribute",
                    trigger, self.selectors.key_attribute
                ));
                continue;
            };

            let label = document.text_content(trigger);
            bindings.register(ClickHandler {
                trigger,
                key: PageKey::from(key),
                label,
            });
        }

        debug!("Bound {} navigation triggers", bindings.len());
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{LogLevel, NullSink};

    fn bind(markup: &str) -> (Document, Bindings, DiagnosticLog) {
        let doc = Document::parse(markup).unwrap();
        let selectors = Selectors::default();
        let mut log = DiagnosticLog::new(NullSink);
        let bindings = NavigationBinder::new(&selectors).bind(&doc, &mut log);
        (doc, bindings, log)
    }

    #[test]
    fn test_binds_one_handler_per_trigger() {
        let (doc, bindings, log) = bind(
            r#"<nav>
                <button class="nav-item" data-page="home">  Home </button>
                <button class="nav-item" data-page="tasks"><span>📋</span> Tasks</button>
                <a class="nav-item" data-page="tasks">see tasks</a>
            </nav>"#,
        );
        let triggers = doc.elements_with_class("nav-item");

        assert_eq!(bindings.len(), 3);
        assert_eq!(bindings.handler(triggers[0]).unwrap().label, "Home");
        assert_eq!(bindings.handler(triggers[1]).unwrap().label, "📋 Tasks");
        assert_eq!(bindings.handler(triggers[2]).unwrap().key, PageKey::from("tasks"));
        assert_eq!(bindings.for_key("tasks").unwrap().trigger, triggers[1]);
        assert_eq!(bindings.nth(0).unwrap().key, PageKey::from("home"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_zero_triggers_is_a_no_op() {
        let (_, bindings, log) = bind("<main><p>nothing to click</p></main>");
        assert!(bindings.is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn test_trigger_without_key_is_skipped() {
        let (doc, bindings, log) = bind(r#"<nav><button class="nav-item">Mystery</button></nav>"#);
        let trigger = doc.elements_with_class("nav-item")[0];

        assert!(bindings.handler(trigger).is_none());
        assert_eq!(log.count(LogLevel::Warning), 1);
    }
}
