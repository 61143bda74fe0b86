//! Markup loading
//!
//! Builds a [`Document`] from well-formed (X)HTML. Boolean attributes need a
//! value (`hidden="hidden"`), and named entities other than the XML ones are
//! rejected by the parser.

use super::{Document, Element, ElementId, Node};
use crate::error::DocumentError;
use roxmltree::ParsingOptions;
use tracing::debug;

impl Document {
    /// Parse markup into a document
    pub fn parse(markup: &str) -> Result<Self, DocumentError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let parsed = roxmltree::Document::parse_with_options(markup, options).map_err(|e| {
            DocumentError::Parse {
                message: e.to_string(),
            }
        })?;

        let mut elements = Vec::new();
        push_element(&mut elements, parsed.root_element(), None);

        debug!("Parsed document with {} elements", elements.len());
        Ok(Document::from_elements(elements))
    }
}

/// Append `node` and its descendants in pre-order, returning the new id
fn push_element(
    elements: &mut Vec<Element>,
    node: roxmltree::Node<'_, '_>,
    parent: Option<ElementId>,
) -> ElementId {
    let id = ElementId(elements.len());

    let mut element = Element::new(node.tag_name().name().to_ascii_lowercase());
    element.parent = parent;
    for attribute in node.attributes() {
        match attribute.name() {
            "class" => {
                for class in attribute.value().split_whitespace() {
                    if !element.has_class(class) {
                        element.classes.push(class.to_string());
                    }
                }
            }
            "hidden" => element.hidden = true,
            name => {
                element
                    .attributes
                    .insert(name.to_string(), attribute.value().to_string());
            }
        }
    }
    elements.push(element);

    let mut children = Vec::new();
    for child in node.children() {
        if child.is_element() {
            let child_id = push_element(elements, child, Some(id));
            children.push(Node::Element(child_id));
        } else if let Some(text) = child.text().filter(|_| child.is_text()) {
            if !text.trim().is_empty() {
                children.push(Node::Text(text.to_string()));
            }
        }
    }
    elements[id.0].children = children;

    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_doctype_and_namespace() {
        let markup = r#"<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" lang="en">
  <body>
    <main class="page  page" data-page="home" id="home-page">Hi</main>
  </body>
</html>"#;
        let doc = Document::parse(markup).unwrap();
        let pages = doc.elements_with_class("page");
        assert_eq!(pages.len(), 1);

        let page = doc.element(pages[0]).unwrap();
        assert_eq!(page.tag, "main");
        assert_eq!(page.classes, vec!["page"]);
        assert_eq!(page.attribute("data-page"), Some("home"));
        assert_eq!(page.attribute("id"), Some("home-page"));
        assert!(page.attribute("class").is_none());
        assert!(page.parent.is_some());
    }

    #[test]
    fn test_hidden_attribute() {
        let markup = r#"<div>
            <p hidden="hidden">a</p>
            <p hidden="">b</p>
            <p>c</p>
        </div>"#;
        let doc = Document::parse(markup).unwrap();
        let hidden: Vec<_> = doc
            .ids()
            .filter(|id| doc.element(*id).unwrap().tag == "p")
            .map(|id| doc.is_hidden(id))
            .collect();
        assert_eq!(hidden, vec![true, true, false]);
    }

    #[test]
    fn test_whitespace_text_is_dropped() {
        let doc = Document::parse("<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>").unwrap();
        let root = doc.element(doc.root()).unwrap();
        assert_eq!(root.children.len(), 2);
        assert!(root.children.iter().all(|c| matches!(c, Node::Element(_))));
    }

    #[test]
    fn test_malformed_markup_is_an_error() {
        let err = Document::parse("<div><p>unclosed</div>").unwrap_err();
        assert!(matches!(err, DocumentError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse markup"));
    }
}
