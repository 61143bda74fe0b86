//! Navigation bar component

use crate::interactive::handle::NavItem;
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct NavBarProps {
    pub items: Vec<NavItem>,
    /// Index of the trigger with keyboard focus
    pub focused: usize,
}

/// One bordered button per navigation trigger.
///
/// The active trigger is drawn green, the focused one gets a cyan border.
#[component]
pub fn NavBar(props: &NavBarProps) -> impl Into<AnyElement<'static>> {
    if props.items.is_empty() {
        return element! {
            View(height: 1) {
                Text(content: "No navigation triggers found", color: Color::Yellow)
            }
        };
    }

    element! {
        View(key: "nav-bar", flex_direction: FlexDirection::Row, gap: 1) {
            #(props.items.iter().enumerate().map(|(i, item)| {
                let focused = i == props.focused;
                let (color, weight) = if item.active {
                    (Color::Green, Weight::Bold)
                } else {
                    (Color::White, Weight::Normal)
                };
                let shortcut = if i < 9 { format!("{} ", i + 1) } else { String::new() };

                element! {
                    View(
                        key: item.key.clone(),
                        border_style: BorderStyle::Round,
                        border_color: if focused { Color::Cyan } else { Color::DarkGrey },
                        padding_left: 1,
                        padding_right: 1,
                        flex_shrink: 0.0,
                    ) {
                        Text(content: shortcut, color: Color::DarkGrey)
                        Text(content: item.label.clone(), color: color, weight: weight)
                    }
                }
            }).collect::<Vec<_>>())
        }
    }
}
