//! Headless navigation command

use super::load_application;
use crate::config::CliConfigLoader;
use crate::output::{print_snapshot, ConsoleSink};
use anyhow::{bail, Result};
use beankeeper_core::{DiagnosticLog, Snapshot};
use serde::Serialize;
use tracing::debug;

/// One navigation and the state it produced
#[derive(Debug, Serialize)]
struct NavigationStep<'a> {
    key: &'a str,
    found: bool,
    snapshot: Snapshot,
}

/// Start the application and navigate to each key in turn
pub async fn navigate_command(
    config_loader: CliConfigLoader,
    keys: Vec<String>,
    json: bool,
) -> Result<()> {
    let (mut app, config) =
        load_application(&config_loader, DiagnosticLog::new(ConsoleSink)).await?;

    if app.start().is_err() {
        debug!(
            "Default page '{}' is not routable",
            config.settings.default_page
        );
    }

    let mut steps = Vec::with_capacity(keys.len());
    let mut missing = Vec::new();
    for key in &keys {
        let found = app.navigate(key).is_ok();
        if !found {
            missing.push(key.as_str());
        }

        let snapshot = app.snapshot();
        if json {
            steps.push(NavigationStep {
                key,
                found,
                snapshot,
            });
        } else {
            print_snapshot(key, &snapshot);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    }

    if !missing.is_empty() {
        bail!("Unknown page key(s): {}", missing.join(", "));
    }
    Ok(())
}
