//! The mutation surface the router drives

use crate::dom::{Document, ElementId, ScrollRequest};

/// Operations the router needs from a document
pub trait PageSurface {
    /// Show or hide an element
    fn set_hidden(&mut self, element: ElementId, hidden: bool);

    /// Add or remove a class
    fn set_class(&mut self, element: ElementId, class: &str, present: bool);

    /// Move the viewport
    fn scroll_to(&mut self, request: ScrollRequest);
}

impl PageSurface for Document {
    fn set_hidden(&mut self, element: ElementId, hidden: bool) {
        Document::set_hidden(self, element, hidden);
    }

    fn set_class(&mut self, element: ElementId, class: &str, present: bool) {
        if present {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        Document::scroll_to(self, request);
    }
}
