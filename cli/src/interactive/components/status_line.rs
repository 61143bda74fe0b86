//! Status line component
//!
//! Shows the latest diagnostic on the left and the key hints on the right.

use crate::interactive::text_utils::truncate_to_width;
use beankeeper_core::{LogLevel, LogRecord};
use iocraft::prelude::*;

const KEY_HINTS: &str = "←/→ focus · enter open · 1-9 jump · ↑/↓ scroll · q quit";

#[derive(Default, Props)]
pub struct StatusLineProps {
    pub record: Option<LogRecord>,
    pub width: usize,
}

fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::White,
        LogLevel::Success => Color::Green,
        LogLevel::Warning => Color::Yellow,
        LogLevel::Error => Color::Red,
    }
}

#[component]
pub fn StatusLine(props: &StatusLineProps) -> impl Into<AnyElement<'static>> {
    let hints_width = crate::interactive::text_utils::text_width(KEY_HINTS);
    let room = props.width.saturating_sub(hints_width + 4);

    let (message, color) = match &props.record {
        Some(record) => (
            truncate_to_width(&record.formatted(), room),
            level_color(record.level),
        ),
        None => (String::new(), Color::White),
    };

    element! {
        View(
            key: "status-line",
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
        ) {
            Text(content: message, color: color)
            Text(content: KEY_HINTS, color: Color::DarkGrey)
        }
    }
}
