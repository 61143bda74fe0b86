//! # beankeeper CLI
//!
//! Command-line interface for Beankeeper - an attribute-driven page router.
//!
//! ## Usage
//!
//! - `beankeeper` - Browse the document interactively
//! - `beankeeper pages` - List the routable pages
//! - `beankeeper navigate <KEY>...` - Navigate headless and print the state
//!
//! Without `--document` the built-in Beankeeper page is used.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

mod commands;
mod config;
mod interactive;
mod output;

use commands::{interactive_command, navigate_command, pages_command};
use config::CliConfigLoader;

/// beankeeper - browse an attribute-routed page in the terminal
#[derive(Parser)]
#[command(name = "beankeeper")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Switch between the pages of a document by key")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markup document to load instead of the configured one
    #[arg(long)]
    document: Option<PathBuf>,

    /// Page shown at startup
    #[arg(long)]
    default_page: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write interactive mode logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the routable pages
    Pages,

    /// Navigate to each key in turn and print the resulting state
    Navigate {
        /// Page keys to visit
        #[arg(required = true)]
        keys: Vec<String>,

        /// Print the states as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(document) = &cli.document {
        loader = loader.with_document_override(document.clone());
    }

    if let Some(page) = &cli.default_page {
        loader = loader.with_default_page_override(page.clone());
    }

    loader
}

/// Route interactive mode logs to `log_file`; without one they are dropped
fn init_file_tracing(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.command.is_none() {
        init_file_tracing(cli.log_file.as_deref(), cli.verbose)?;
    } else {
        beankeeper_core::init_tracing_with_debug(cli.verbose);
    }

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Pages) => pages_command(config_loader).await,
        Some(Commands::Navigate { keys, json }) => {
            navigate_command(config_loader, keys, json).await
        }
        // Default to interactive mode
        None => interactive_command(config_loader).await,
    }
}
