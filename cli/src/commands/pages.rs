//! Page listing command

use super::load_application;
use crate::config::CliConfigLoader;
use crate::output::ConsoleSink;
use anyhow::Result;
use beankeeper_core::DiagnosticLog;
use colored::*;
use tracing::info;

/// List the routable pages of the configured document
pub async fn pages_command(config_loader: CliConfigLoader) -> Result<()> {
    let (app, config) = load_application(&config_loader, DiagnosticLog::new(ConsoleSink)).await?;
    info!("Listing pages of {}", config.document.describe());

    let table = app.router().table();
    println!(
        "📄 {} {}\n",
        "Pages in".bright_blue().bold(),
        config.document.describe().bright_blue()
    );

    if table.is_empty() {
        println!("  {}", "⚠️  No pages found".bright_yellow());
        return Ok(());
    }

    let keys = table.page_keys();
    let width = keys.iter().map(|k| k.as_str().len()).max().unwrap_or(0);
    for key in &keys {
        let is_default = key.as_str() == config.settings.default_page;
        let marker = if is_default { "●" } else { "○" };
        let label = app
            .bindings()
            .for_key(key.as_str())
            .map(|h| h.label.as_str())
            .unwrap_or("-");
        let suffix = if is_default { " (default)".dimmed().to_string() } else { String::new() };
        println!(
            "  {} {:<width$}  {}{}",
            marker.bright_green(),
            key.as_str(),
            label,
            suffix,
            width = width
        );
    }

    Ok(())
}
