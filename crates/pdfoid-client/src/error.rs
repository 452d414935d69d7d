//! Error types for the pdfoid client.

/// Error from a render operation.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The rendering service URL is not configured.
    ///
    /// Returned before any network I/O. Callers should treat PDF output
    /// as unavailable rather than retrying.
    #[error("pdfoid is not configured, can't render PDFs")]
    NotConfigured,

    /// Transport-level failure (network, timeout, bad status, corrupted body).
    ///
    /// Recoverable at the caller's discretion; the client never retries.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote renderer explicitly reported failure.
    ///
    /// Carries the server-supplied message verbatim.
    #[error("{0}")]
    RenderFailed(String),
}

/// Transport-level failure detail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransportError {
    /// HTTP request failed (connection error, timeout, etc).
    #[error("HTTP request failed")]
    Http(#[from] ureq::Error),

    /// Server returned a non-2xx status.
    #[error("HTTP error: {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("invalid response body")]
    Json(#[from] serde_json::Error),

    /// Successful response carried no `pdf` field.
    #[error("response missing 'pdf' field")]
    MissingPdf,

    /// The `pdf` field was not valid base64.
    #[error("invalid base64 in response")]
    Base64(#[from] base64::DecodeError),
}
