//! Sync HTTP client for the pdfoid rendering service.

use std::time::Duration;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use pdfoid_config::RendererConfig;
use tracing::debug;
use ureq::Agent;

use crate::consts::{DEFAULT_TIMEOUT, DEFAULT_WAIT};
use crate::error::{RenderError, TransportError};
use crate::types::{RenderPayload, RenderRequest, RenderResponse};

/// Create HTTP agent with the specified timeout.
///
/// Status errors are handled explicitly so error response bodies can be
/// captured for diagnostics.
fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Client for the pdfoid HTML-to-PDF rendering service.
///
/// Holds the optional service endpoint and a pooled HTTP agent. The client
/// is stateless across calls; each [`render`](Self::render) performs exactly
/// one POST with no retry. Safe to share across threads.
///
/// # Example
///
/// ```ignore
/// use pdfoid_client::{PdfClient, RenderRequest};
///
/// let client = PdfClient::new("http://localhost:8888");
/// let pdf = client.render(&RenderRequest::new("Report", "<p>hi</p>").footer(true))?;
/// std::fs::write("report.pdf", pdf)?;
/// ```
pub struct PdfClient {
    agent: Agent,
    url: Option<String>,
    wait: Duration,
}

impl PdfClient {
    /// Create a client for the given service URL.
    ///
    /// Uses the default 60-second request timeout and 15-second
    /// readiness wait.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: create_agent(DEFAULT_TIMEOUT),
            url: Some(url.into().trim_end_matches('/').to_owned()),
            wait: DEFAULT_WAIT,
        }
    }

    /// Create a client with no configured service.
    ///
    /// Every render call fails fast with [`RenderError::NotConfigured`].
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            agent: create_agent(DEFAULT_TIMEOUT),
            url: None,
            wait: DEFAULT_WAIT,
        }
    }

    /// Create a client from resolved configuration.
    #[must_use]
    pub fn from_config(config: &RendererConfig) -> Self {
        Self {
            agent: create_agent(config.timeout),
            url: config
                .url
                .as_deref()
                .map(|u| u.trim_end_matches('/').to_owned()),
            wait: config.wait,
        }
    }

    /// Set the overall HTTP request timeout.
    ///
    /// Default is 60 seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.agent = create_agent(timeout);
        self
    }

    /// Set how long the renderer waits for the readiness condition.
    ///
    /// Default is 15 seconds.
    #[must_use]
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Whether the rendering service is configured.
    ///
    /// Check this before offering PDF output; when false,
    /// [`render`](Self::render) fails without any network I/O.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Render a document to PDF bytes.
    ///
    /// Sends a single POST to the configured service and decodes the
    /// base64 `pdf` field of the response. Never returns partial content.
    ///
    /// # Errors
    ///
    /// - [`RenderError::NotConfigured`] when no service URL is set
    ///   (checked before any request is built).
    /// - [`RenderError::Transport`] for connection errors, timeouts,
    ///   non-2xx statuses, and corrupted response bodies.
    /// - [`RenderError::RenderFailed`] when the service reports failure,
    ///   carrying its error message verbatim.
    pub fn render(&self, request: &RenderRequest) -> Result<Vec<u8>, RenderError> {
        let Some(url) = self.url.as_deref() else {
            return Err(RenderError::NotConfigured);
        };

        let payload = RenderPayload::new(request, self.wait.as_secs());

        debug!(title = %request.title, footer = request.footer, "sending render request");

        let response = self
            .agent
            .post(url)
            .header("Accept", "application/json")
            .send_json(&payload)
            .map_err(TransportError::Http)?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if !(200..300).contains(&status) {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(TransportError::Status {
                status,
                body: error_body,
            }
            .into());
        }

        let text = body.read_to_string().map_err(TransportError::Http)?;
        let parsed: RenderResponse =
            serde_json::from_str(&text).map_err(TransportError::Json)?;

        if !parsed.success {
            return Err(RenderError::RenderFailed(parsed.error.unwrap_or_default()));
        }

        let encoded = parsed.pdf.ok_or(TransportError::MissingPdf)?;
        let bytes = BASE64_STANDARD
            .decode(encoded.trim())
            .map_err(TransportError::Base64)?;

        debug!(bytes = bytes.len(), "received rendered PDF");
        Ok(bytes)
    }
}
