//! Client for the pdfoid HTML-to-PDF rendering service.
//!
//! pdfoid renders an HTML document to PDF in a headless browser. This crate
//! provides the typed sync gateway to that service:
//! - [`PdfClient`]: one POST per render, 60-second timeout, no retry
//! - [`RenderRequest`]: title + HTML + optional page-numbering footer
//! - [`RenderError`]: not-configured / transport / renderer-reported failure
//!
//! The service URL is optional; an unconfigured client reports
//! [`PdfClient::enabled`] as false and fails fast without network I/O.
//! Requests instruct the renderer to wait (up to a bounded duration) for an
//! element with the `math-loaded` CSS class, so client-side math typesetting
//! finishes before printing.
//!
//! # Example
//!
//! ```ignore
//! use pdfoid_client::{PdfClient, RenderRequest};
//! use pdfoid_config::Config;
//!
//! let config = Config::load(None, None)?;
//! let client = PdfClient::from_config(&config.renderer_resolved);
//!
//! if client.enabled() {
//!     let request = RenderRequest::new("Problem statement", html).footer(true);
//!     let pdf = client.render(&request)?;
//! }
//! ```

mod client;
mod consts;
mod error;
mod types;

pub use client::PdfClient;
pub use consts::{DEFAULT_TIMEOUT, DEFAULT_WAIT, WAIT_FOR_CLASS};
pub use error::{RenderError, TransportError};
pub use types::RenderRequest;
