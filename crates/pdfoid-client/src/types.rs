//! Request and wire types for the pdfoid rendering service.

use serde::{Deserialize, Serialize};

use crate::consts::{FOOTER_TEMPLATE, WAIT_FOR_CLASS};

/// A document to render.
///
/// Constructed per call and discarded afterwards; carries no identity.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Document title.
    pub title: String,
    /// HTML content to convert.
    pub html: String,
    /// Whether to add a page-numbering footer.
    pub footer: bool,
}

impl RenderRequest {
    /// Create a render request without a footer.
    #[must_use]
    pub fn new(title: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            html: html.into(),
            footer: false,
        }
    }

    /// Enable or disable the page-numbering footer.
    #[must_use]
    pub fn footer(mut self, footer: bool) -> Self {
        self.footer = footer;
        self
    }
}

/// Wire payload sent to the rendering service.
///
/// Field names use the hyphenated form the service expects. The
/// `footer-template` field is omitted entirely when no footer is requested.
#[derive(Debug, Serialize)]
pub(crate) struct RenderPayload<'a> {
    pub html: &'a str,
    pub title: &'a str,
    #[serde(rename = "footer-template", skip_serializing_if = "Option::is_none")]
    pub footer_template: Option<&'static str>,
    #[serde(rename = "wait-for-class")]
    pub wait_for_class: &'static str,
    #[serde(rename = "wait-for-duration-secs")]
    pub wait_for_duration_secs: u64,
}

impl<'a> RenderPayload<'a> {
    /// Build the wire payload for a request.
    pub(crate) fn new(request: &'a RenderRequest, wait_secs: u64) -> Self {
        Self {
            html: &request.html,
            title: &request.title,
            footer_template: request.footer.then_some(FOOTER_TEMPLATE),
            wait_for_class: WAIT_FOR_CLASS,
            wait_for_duration_secs: wait_secs,
        }
    }
}

/// Wire response from the rendering service.
#[derive(Debug, Deserialize)]
pub(crate) struct RenderResponse {
    pub success: bool,
    /// Error message, present when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
    /// Base64-encoded PDF, present when `success` is true.
    #[serde(default)]
    pub pdf: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_without_footer_omits_template() {
        let request = RenderRequest::new("Report", "<p>hi</p>");
        let payload = RenderPayload::new(&request, 15);

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("footer-template"));
        assert_eq!(object["html"], "<p>hi</p>");
        assert_eq!(object["title"], "Report");
        assert_eq!(object["wait-for-class"], "math-loaded");
        assert_eq!(object["wait-for-duration-secs"], 15);
    }

    #[test]
    fn test_payload_with_footer_includes_template() {
        let request = RenderRequest::new("Report", "<p>hi</p>").footer(true);
        let payload = RenderPayload::new(&request, 15);

        let value = serde_json::to_value(&payload).unwrap();
        let template = value["footer-template"].as_str().unwrap();

        assert!(!template.is_empty());
        assert!(template.contains("{page_number}"));
        assert!(template.contains("{total_pages}"));
    }

    #[test]
    fn test_payload_empty_strings_allowed() {
        let request = RenderRequest::new("", "");
        let payload = RenderPayload::new(&request, 15);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["html"], "");
        assert_eq!(value["title"], "");
    }

    #[test]
    fn test_response_parse_success() {
        let response: RenderResponse =
            serde_json::from_str(r#"{"success": true, "pdf": "UERGREFUQQ=="}"#).unwrap();

        assert!(response.success);
        assert_eq!(response.pdf.as_deref(), Some("UERGREFUQQ=="));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_response_parse_failure() {
        let response: RenderResponse =
            serde_json::from_str(r#"{"success": false, "error": "engine crashed"}"#).unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("engine crashed"));
        assert!(response.pdf.is_none());
    }

    #[test]
    fn test_request_builder_footer() {
        let request = RenderRequest::new("t", "h");
        assert!(!request.footer);

        let request = request.footer(true);
        assert!(request.footer);
    }
}
