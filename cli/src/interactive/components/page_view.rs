//! Visible page component

use crate::interactive::content::{LineStyle, StyledLine};
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct PageBodyProps {
    pub lines: Vec<StyledLine>,
    pub scroll: usize,
    /// Number of rows available
    pub height: usize,
}

/// The visible window of the current page
#[component]
pub fn PageBody(props: &PageBodyProps) -> impl Into<AnyElement<'static>> {
    if props.lines.is_empty() {
        return element! {
            View(
                flex_grow: 1.0,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "Nothing to show", color: Color::DarkGrey)
            }
        };
    }

    let window = props
        .lines
        .iter()
        .skip(props.scroll)
        .take(props.height.max(1))
        .enumerate()
        .map(|(i, line)| {
            let (color, weight) = match line.style {
                LineStyle::Heading => (Color::Rgb { r: 222, g: 184, b: 135 }, Weight::Bold),
                LineStyle::Item => (Color::White, Weight::Normal),
                LineStyle::Body | LineStyle::Blank => (Color::Grey, Weight::Normal),
            };
            element! {
                View(key: props.scroll + i, height: 1) {
                    Text(content: line.text.clone(), color: color, weight: weight)
                }
            }
        })
        .collect::<Vec<_>>();

    element! {
        View(
            key: "page-body",
            flex_direction: FlexDirection::Column,
            flex_grow: 1.0,
            padding_left: 2,
            padding_right: 2,
        ) {
            #(window)
        }
    }
}
