//! Page keys and the route table
//!
//! The route table maps each page key to its page element and, when one
//! exists, to the trigger that gets the active marker. It is built once at
//! startup and never changes afterwards.

use crate::config::Selectors;
use crate::dom::{Document, ElementId};
use crate::output::DiagnosticLog;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageKey(pub String);

impl PageKey {
    /// Create a new page key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for PageKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PageKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Keyed lookup of pages and active-marker triggers
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    /// Pages in document order
    pages: Vec<(PageKey, ElementId)>,
    page_index: HashMap<PageKey, ElementId>,
    /// Triggers in document order, one per key
    buttons: Vec<(PageKey, ElementId)>,
    button_index: HashMap<PageKey, ElementId>,
    /// Every page element, keyed or not, in document order
    page_elements: Vec<ElementId>,
    /// Every trigger element, keyed or not, in document order
    button_elements: Vec<ElementId>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover pages and triggers in `document`.
    ///
    /// Elements without a key are skipped. When two elements share a key the
    /// first in document order wins.
    pub fn discover(document: &Document, selectors: &Selectors, log: &mut DiagnosticLog) -> Self {
        let mut table = Self::new();

        for (id, key) in document.keyed_elements(&selectors.page_class, &selectors.key_attribute) {
            match key {
                Some(key) => {
                    if !table.insert_page(key, id) {
                        log.warning(format!("Duplicate page key '{}' on element {}", key, id));
                    }
                }
                None => {
                    table.insert_unkeyed_page(id);
                    log.warning(format!(
                        "Page element {} has no {} attribute",
                        id, selectors.key_attribute
                    ));
                }
            }
        }

        for (id, key) in document.keyed_elements(&selectors.nav_class, &selectors.key_attribute) {
            // Missing keys are reported by the binder
            match key {
                Some(key) => {
                    table.insert_button(key, id);
                }
                None => table.insert_unkeyed_button(id),
            }
        }

        tracing::debug!(
            "Discovered {} pages and {} triggers",
            table.pages.len(),
            table.buttons.len()
        );
        table
    }

    /// Register a page. Returns `false` if the key is already taken; the
    /// element is still hidden on every navigation.
    pub fn insert_page(&mut self, key: impl Into<PageKey>, element: ElementId) -> bool {
        self.page_elements.push(element);
        let key = key.into();
        if self.page_index.contains_key(&key) {
            return false;
        }
        self.page_index.insert(key.clone(), element);
        self.pages.push((key, element));
        true
    }

    /// Register the trigger marked active for `key`. Returns `false` if one is
    /// already registered; the element still loses the marker on every
    /// navigation.
    pub fn insert_button(&mut self, key: impl Into<PageKey>, element: ElementId) -> bool {
        self.button_elements.push(element);
        let key = key.into();
        if self.button_index.contains_key(&key) {
            return false;
        }
        self.button_index.insert(key.clone(), element);
        self.buttons.push((key, element));
        true
    }

    /// Register a page element that no key can reach
    pub fn insert_unkeyed_page(&mut self, element: ElementId) {
        self.page_elements.push(element);
    }

    /// Register a trigger element that no key can reach
    pub fn insert_unkeyed_button(&mut self, element: ElementId) {
        self.button_elements.push(element);
    }

    pub fn page(&self, key: &str) -> Option<ElementId> {
        self.page_index.get(key).copied()
    }

    pub fn button(&self, key: &str) -> Option<ElementId> {
        self.button_index.get(key).copied()
    }

    pub fn contains_page(&self, key: &str) -> bool {
        self.page_index.contains_key(key)
    }

    /// Pages in document order
    pub fn pages(&self) -> impl Iterator<Item = (&PageKey, ElementId)> {
        self.pages.iter().map(|(k, id)| (k, *id))
    }

    /// Triggers in document order
    pub fn buttons(&self) -> impl Iterator<Item = (&PageKey, ElementId)> {
        self.buttons.iter().map(|(k, id)| (k, *id))
    }

    /// Every page element, including duplicates and keyless ones
    pub fn page_elements(&self) -> &[ElementId] {
        &self.page_elements
    }

    /// Every trigger element, including duplicates and keyless ones
    pub fn button_elements(&self) -> &[ElementId] {
        &self.button_elements
    }

    /// Known page keys in document order
    pub fn page_keys(&self) -> Vec<PageKey> {
        self.pages.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
