//! In-memory document model
//!
//! A small typed stand-in for the browser DOM: an arena of elements in
//! document order, each with a class list, attributes, a `hidden` flag and
//! child nodes, plus the viewport scroll state.

mod markup;

use crate::config::ScrollBehavior;
use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Markup of the built-in Beankeeper page
pub const BEANKEEPER_MARKUP: &str = include_str!("../../assets/index.html");

/// Elements whose text is never part of the rendered content
const NON_RENDERED_TAGS: &[&str] = &["script", "style", "head", "title"];

/// Stable index of an element, assigned in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(ElementId),
    Text(String),
}

/// A single element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Class list in source order, without duplicates
    pub classes: Vec<String>,
    /// Attributes other than `class` and `hidden`
    pub attributes: BTreeMap<String, String>,
    pub hidden: bool,
    pub parent: Option<ElementId>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            hidden: false,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Scroll position of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    /// Behavior of the most recent scroll request
    pub last_behavior: Option<ScrollBehavior>,
    /// Number of scroll requests received
    pub requests: u64,
}

/// A request to move the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub x: u32,
    pub y: u32,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Scroll to the top-left origin
    pub fn top(behavior: ScrollBehavior) -> Self {
        Self { x: 0, y: 0, behavior }
    }
}

/// An element tree with its viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
    viewport: Viewport,
}

impl Document {
    /// Build a document from elements already in document order.
    ///
    /// Element `0` is the root.
    pub(crate) fn from_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            viewport: Viewport::default(),
        }
    }

    /// The built-in Beankeeper page
    pub fn beankeeper() -> Result<Self, DocumentError> {
        Self::parse(BEANKEEPER_MARKUP)
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// All element ids in document order
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len()).map(ElementId)
    }

    /// Elements carrying `class`, in document order
    pub fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.ids()
            .filter(|id| self.elements[id.0].has_class(class))
            .collect()
    }

    /// Elements carrying `class` paired with their value for `attribute`.
    ///
    /// Elements that have the class but lack the attribute are returned with `None`.
    pub fn keyed_elements(&self, class: &str, attribute: &str) -> Vec<(ElementId, Option<&str>)> {
        self.elements_with_class(class)
            .into_iter()
            .map(|id| (id, self.elements[id.0].attribute(attribute)))
            .collect()
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attribute(name))
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(|e| e.hidden)
    }

    /// Text of the first `<title>` element
    pub fn title(&self) -> Option<String> {
        self.ids()
            .find(|id| self.elements[id.0].tag == "title")
            .map(|id| self.raw_text(id))
            .filter(|t| !t.is_empty())
    }

    /// Whitespace-normalized text of an element and its descendants
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        normalize_whitespace(&out)
    }

    fn raw_text(&self, id: ElementId) -> String {
        let Some(element) = self.element(id) else {
            return String::new();
        };
        let text: String = element
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect::<Vec<_>>()
            .join(" ");
        normalize_whitespace(&text)
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        let Some(element) = self.element(id) else {
            return;
        };
        if NON_RENDERED_TAGS.contains(&element.tag.as_str()) {
            return;
        }
        for child in &element.children {
            match child {
                Node::Text(text) => {
                    out.push(' ');
                    out.push_str(text);
                }
                Node::Element(child) => self.collect_text(*child, out),
            }
        }
    }

    /// Set or clear the `hidden` flag. Unknown ids are ignored.
    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        if let Some(element) = self.element_mut(id) {
            element.hidden = hidden;
        }
    }

    /// Add `class` to the class list if it is not already present
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            element.classes.retain(|c| c != class);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_to(&mut self, request: ScrollRequest) {
        self.viewport.x = request.x;
        self.viewport.y = request.y;
        self.viewport.last_behavior = Some(request.behavior);
        self.viewport.requests += 1;
    }

    /// Move the viewport vertically, clamped at the origin and at `max_y`
    pub fn scroll_by(&mut self, delta: i64, max_y: u32) {
        let target = (i64::from(self.viewport.y) + delta).clamp(0, i64::from(max_y));
        self.viewport.y = target as u32;
    }
}

pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
