//! Page content as terminal lines

use super::text_utils::{wrap_text, wrap_with_prefix};
use beankeeper_core::dom::Node;
use beankeeper_core::{Document, ElementId};

/// Containers whose children are laid out as separate blocks
const CONTAINER_TAGS: &[&str] = &[
    "section", "article", "div", "main", "header", "footer", "nav", "ul", "ol",
];

/// Tags never shown on screen
const SKIPPED_TAGS: &[&str] = &["script", "style", "template"];

/// How a line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    Heading,
    Item,
    #[default]
    Body,
    Blank,
}

/// One line of page content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub text: String,
    pub style: LineStyle,
}

impl StyledLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new(String::new(), LineStyle::Blank)
    }
}

/// Content blocks of `page`, unwrapped
pub fn page_blocks(document: &Document, page: ElementId) -> Vec<StyledLine> {
    let mut blocks = Vec::new();
    collect_blocks(document, page, &mut blocks);
    blocks
}

fn collect_blocks(document: &Document, id: ElementId, out: &mut Vec<StyledLine>) {
    let Some(element) = document.element(id) else {
        return;
    };

    for child in &element.children {
        match child {
            Node::Text(text) => {
                let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if !text.is_empty() {
                    out.push(StyledLine::new(text, LineStyle::Body));
                }
            }
            Node::Element(child_id) => {
                let Some(child) = document.element(*child_id) else {
                    continue;
                };
                let tag = child.tag.as_str();
                if child.hidden || SKIPPED_TAGS.contains(&tag) {
                    continue;
                }

                if CONTAINER_TAGS.contains(&tag) {
                    collect_blocks(document, *child_id, out);
                    continue;
                }

                let style = match tag {
                    "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => LineStyle::Heading,
                    "li" => LineStyle::Item,
                    _ => LineStyle::Body,
                };
                let text = document.text_content(*child_id);
                if !text.is_empty() {
                    out.push(StyledLine::new(text, style));
                }
            }
        }
    }
}

/// Wrap blocks to `width` columns. Headings after the first block get a
/// blank line above them.
pub fn layout_lines(blocks: &[StyledLine], width: usize) -> Vec<StyledLine> {
    let mut lines = Vec::new();

    for block in blocks {
        if block.style == LineStyle::Heading && !lines.is_empty() {
            lines.push(StyledLine::blank());
        }

        let wrapped = match block.style {
            LineStyle::Item => wrap_with_prefix(&block.text, width, "• ", "  "),
            _ => wrap_text(&block.text, width),
        };
        lines.extend(wrapped.into_iter().map(|text| StyledLine::new(text, block.style)));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<main>
        <section class="page" data-page="beans">
            <h2>🫘 Beans</h2>
            <p>Every bag on the shelf.</p>
            <ul>
                <li>Ethiopia Guji, roasted 3 days ago</li>
                <li hidden="hidden">Secret blend</li>
            </ul>
            <h3>Notes</h3>
            loose text
            <script>ignored()</script>
        </section>
    </main>"#;

    fn page(document: &Document) -> ElementId {
        document.elements_with_class("page")[0]
    }

    #[test]
    fn test_page_blocks_classifies_elements() {
        let document = Document::parse(PAGE).unwrap();
        let blocks = page_blocks(&document, page(&document));

        let styles: Vec<_> = blocks.iter().map(|b| b.style).collect();
        assert_eq!(
            styles,
            vec![
                LineStyle::Heading,
                LineStyle::Body,
                LineStyle::Item,
                LineStyle::Heading,
                LineStyle::Body,
            ]
        );
        assert_eq!(blocks[2].text, "Ethiopia Guji, roasted 3 days ago");
        assert_eq!(blocks[4].text, "loose text");
    }

    #[test]
    fn test_layout_lines_wraps_and_spaces_headings() {
        let document = Document::parse(PAGE).unwrap();
        let blocks = page_blocks(&document, page(&document));
        let lines = layout_lines(&blocks, 20);

        assert_eq!(lines[0].style, LineStyle::Heading);
        assert!(lines.iter().any(|l| l.style == LineStyle::Blank));
        let items: Vec<_> = lines.iter().filter(|l| l.style == LineStyle::Item).collect();
        assert!(items.len() > 1);
        assert!(items[0].text.starts_with("• "));
        assert!(items[1].text.starts_with("  "));
    }

    #[test]
    fn test_empty_page_has_no_lines() {
        let document = Document::parse(r#"<div class="page" data-page="x"/>"#).unwrap();
        let blocks = page_blocks(&document, page(&document));
        assert!(layout_lines(&blocks, 40).is_empty());
    }
}
