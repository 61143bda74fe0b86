//! Beankeeper header component
//!
//! A small coffee cup drawn in a roast gradient next to the document title.

use iocraft::prelude::*;

pub const CUP_LOGO_LINES: &[&str] = &[
    "   ) )  ",
    "  ( (   ",
    " ▄▄▄▄▄▄ ",
    " █    █▄",
    " █    █▀",
    "  ▀▀▀▀  ",
];

// Light roast at the top down to dark roast at the base
pub const LOGO_COLORS: &[(u8, u8, u8)] = &[
    (222, 184, 135),
    (210, 160, 110),
    (181, 126, 80),
    (160, 100, 60),
    (139, 80, 45),
    (110, 60, 35),
];

#[derive(Default, Props)]
pub struct BeankeeperLogoProps {
    pub title: String,
    pub subtitle: String,
}

/// Coffee cup logo with the document title beside it
#[component]
pub fn BeankeeperLogo(props: &BeankeeperLogoProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "logo", flex_direction: FlexDirection::Row, gap: 2) {
            View(flex_direction: FlexDirection::Column) {
                #(CUP_LOGO_LINES.iter().enumerate().map(|(i, line)| {
                    let color = LOGO_COLORS.get(i).unwrap_or(&(110, 60, 35));
                    element! {
                        Text(
                            content: *line,
                            color: Color::Rgb { r: color.0, g: color.1, b: color.2 },
                            weight: Weight::Bold,
                        )
                    }
                }).collect::<Vec<_>>())
            }
            View(
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
            ) {
                Text(content: props.title.clone(), color: Color::White, weight: Weight::Bold)
                Text(content: props.subtitle.clone(), color: Color::DarkGrey)
            }
        }
    }
}
