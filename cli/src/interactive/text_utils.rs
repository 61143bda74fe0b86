//! Text layout helpers for the interactive UI
//!
//! Widths are display columns measured with `unicode-width`, so emoji and
//! CJK text wrap where the terminal actually breaks them.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal size used when the real one cannot be queried
const FALLBACK_SIZE: (usize, usize) = (80, 24);

/// Display width of `text`
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Current terminal size as `(columns, rows)`
pub fn terminal_size() -> (usize, usize) {
    crossterm::terminal::size()
        .ok()
        .filter(|(cols, rows)| *cols > 0 && *rows > 0)
        .map(|(cols, rows)| (cols as usize, rows as usize))
        .unwrap_or(FALLBACK_SIZE)
}

/// Wrap `text` at word boundaries so no line is wider than `max_width`.
///
/// Words wider than a whole line are split between characters.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = text_width(word);
        let needed = if current.is_empty() { word_width } else { current_width + 1 + word_width };

        if needed <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if current_width + ch_width > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` with `first` in front of the first line and `rest` in front
/// of the continuation lines
pub fn wrap_with_prefix(text: &str, max_width: usize, first: &str, rest: &str) -> Vec<String> {
    let indent = text_width(first).max(text_width(rest));
    wrap_text(text, max_width.saturating_sub(indent))
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { first } else { rest };
            format!("{}{}", prefix, line)
        })
        .collect()
}

/// Cut `text` to at most `max_width` columns, ending with `…` when shortened
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text_width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}
