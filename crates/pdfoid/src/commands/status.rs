//! `pdfoid status` command implementation.

use std::path::PathBuf;

use clap::Args;
use pdfoid_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the status command.
#[derive(Args)]
pub(crate) struct StatusArgs {
    /// Path to configuration file (default: auto-discover pdfoid.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl StatusArgs {
    /// Execute the status command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let renderer = &config.renderer_resolved;

        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: (none found, using defaults)"),
        }

        if let Some(url) = &renderer.url {
            output.success(&format!("PDF rendering enabled: {url}"));
            output.info(&format!(
                "Timeout: {}s, readiness wait: {}s",
                renderer.timeout.as_secs(),
                renderer.wait.as_secs()
            ));
        } else {
            output.warning("PDF rendering disabled: no renderer URL configured");
        }

        Ok(())
    }
}
