//! Interactive mode command

use super::load_application;
use crate::config::CliConfigLoader;
use crate::interactive::{run_interactive, AppHandle};
use anyhow::Result;
use beankeeper_core::DiagnosticLog;
use tracing::debug;

/// Start interactive mode
pub async fn interactive_command(config_loader: CliConfigLoader) -> Result<()> {
    // Diagnostics go to tracing, which writes to the log file or nowhere
    let (mut app, config) = load_application(&config_loader, DiagnosticLog::default()).await?;
    debug!("Interactive mode on {}", config.document.describe());

    if app.start().is_err() {
        debug!(
            "Default page '{}' is not routable",
            config.settings.default_page
        );
    }

    run_interactive(AppHandle::new(app)).await
}
