//! Protocol constants for the pdfoid rendering service.

use std::time::Duration;

/// Default overall HTTP timeout for render requests (60 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default wait for the render-readiness condition (15 seconds).
pub const DEFAULT_WAIT: Duration = Duration::from_secs(15);

/// CSS class the renderer waits for before printing.
///
/// Documents signal that client-side math typesetting has finished by
/// adding an element with this class to the DOM.
pub const WAIT_FOR_CLASS: &str = "math-loaded";

/// Footer template with page numbering placeholders.
///
/// `{page_number}` and `{total_pages}` are substituted by the remote
/// renderer, not by this client.
pub const FOOTER_TEMPLATE: &str = "<center style=\"margin: 0 auto; font-family: Segoe UI; \
     font-size: 10px\">Page {page_number} of {total_pages}</center>";
