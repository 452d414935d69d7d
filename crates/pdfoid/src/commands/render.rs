//! `pdfoid render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use pdfoid_client::{PdfClient, RenderRequest};
use pdfoid_config::{CliSettings, Config};
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the HTML file to render.
    input: PathBuf,

    /// Output PDF path (default: input path with .pdf extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document title (default: input file stem).
    #[arg(short, long)]
    title: Option<String>,

    /// Add a page-numbering footer.
    #[arg(long)]
    footer: bool,

    /// Renderer service URL (overrides config).
    #[arg(long, env = "PDFOID_URL")]
    url: Option<String>,

    /// HTTP request timeout in seconds (overrides config).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Path to configuration file (default: auto-discover pdfoid.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, I/O, or rendering fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            url: self.url,
            timeout_secs: self.timeout_secs,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let client = PdfClient::from_config(&config.renderer_resolved);

        if !client.enabled() {
            output.warning(
                "No renderer URL configured. Set [renderer] url in pdfoid.toml, \
                 pass --url, or set PDFOID_URL.",
            );
        }

        let html = std::fs::read_to_string(&self.input)?;
        let title = self
            .title
            .unwrap_or_else(|| title_from_path(&self.input));
        let output_path = self
            .output
            .unwrap_or_else(|| self.input.with_extension("pdf"));

        info!(
            input = %self.input.display(),
            html_bytes = html.len(),
            footer = self.footer,
            "rendering HTML to PDF"
        );

        let request = RenderRequest::new(title, html).footer(self.footer);
        let pdf = client.render(&request)?;

        std::fs::write(&output_path, &pdf)?;

        output.success(&format!(
            "Wrote {} ({} bytes)",
            output_path.display(),
            pdf.len()
        ));
        Ok(())
    }
}

/// Derive a document title from the input file name.
fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_from_path() {
        assert_eq!(title_from_path(Path::new("docs/report.html")), "report");
        assert_eq!(title_from_path(Path::new("report")), "report");
    }

    #[test]
    fn test_title_from_path_empty() {
        assert_eq!(title_from_path(Path::new("")), "");
    }
}
