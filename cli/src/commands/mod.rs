//! CLI command implementations

pub mod interactive;
pub mod navigate;
pub mod pages;

pub use interactive::interactive_command;
pub use navigate::navigate_command;
pub use pages::pages_command;

use crate::config::{CliConfigLoader, ResolvedConfig};
use anyhow::{Context, Result};
use beankeeper_core::{Application, DiagnosticLog, Document};
use tracing::debug;

/// Resolve configuration, read the document and build the application
pub(crate) async fn load_application(
    loader: &CliConfigLoader,
    log: DiagnosticLog,
) -> Result<(Application, ResolvedConfig)> {
    let config = loader.load().await?;
    debug!("Loading document from {}", config.document.describe());

    let markup = config.document.read().await?;
    let document = Document::parse(&markup)
        .with_context(|| format!("Failed to load {}", config.document.describe()))?;
    let app = Application::with_log(document, config.settings.clone(), log)?;

    Ok((app, config))
}
