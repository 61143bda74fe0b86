//! Console output for headless commands

use beankeeper_core::output::DiagnosticSink;
use beankeeper_core::{LogLevel, LogRecord, PageKey, Snapshot};
use colored::*;

/// Writes diagnostics to stderr, colored by level
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn write(&mut self, record: &LogRecord) {
        eprintln!("{}", format_record(record));
    }
}

/// Render one diagnostic line
pub fn format_record(record: &LogRecord) -> String {
    format!("{} {}", record.level.symbol(), paint(record.level, &record.message))
}

fn paint(level: LogLevel, text: &str) -> ColoredString {
    match level {
        LogLevel::Info => text.normal(),
        LogLevel::Success => text.bright_green(),
        LogLevel::Warning => text.bright_yellow(),
        LogLevel::Error => text.bright_red().bold(),
    }
}

fn join_keys(keys: &[PageKey]) -> String {
    if keys.is_empty() {
        return "(none)".to_string();
    }
    keys.iter()
        .map(PageKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the state reached after navigating to `key`
pub fn format_snapshot(key: &str, snapshot: &Snapshot) -> String {
    let behavior = snapshot
        .viewport
        .last_behavior
        .map(|b| b.as_str())
        .unwrap_or("none");

    let mut lines = vec![format!("{} {}", "→".bright_blue(), key.bold())];
    lines.push(format!(
        "  {}: {}",
        "Visible".dimmed(),
        join_keys(&snapshot.visible_pages).cyan()
    ));
    lines.push(format!(
        "  {}: {}",
        "Active".dimmed(),
        join_keys(&snapshot.active_triggers).cyan()
    ));
    lines.push(format!(
        "  {}: {} ({})",
        "Scroll".dimmed(),
        snapshot.viewport.y,
        behavior
    ));
    lines.join("\n")
}

/// Print the state reached after navigating to `key`
pub fn print_snapshot(key: &str, snapshot: &Snapshot) {
    println!("{}", format_snapshot(key, snapshot));
}
