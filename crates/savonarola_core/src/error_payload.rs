//! Typed deserialization of the provider's structured error payload.
//!
//! When the provider rejects a request outright it returns
//! `{"error": {"code", "message", "innererror": {"content_filter_result"}}}`.
//! A body that does not parse into this shape is a malformed payload and the
//! caller degrades to the generic provider-error path.

use crate::ContentFilterResults;
use serde::{Deserialize, Serialize};

/// Top-level provider error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// The error detail object
    pub error: ApiErrorDetail,
}

/// Provider error detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable error message
    #[serde(default)]
    pub message: Option<String>,
    /// Nested detail carrying the per-category verdicts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innererror: Option<ApiInnerError>,
}

/// Inner error object of a content-policy rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInnerError {
    /// Machine-readable inner error code
    #[serde(default)]
    pub code: Option<String>,
    /// Per-category verdicts for the rejected request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_filter_result: Option<ContentFilterResults>,
}

impl ApiErrorDetail {
    /// Whether the error code marks a content-policy rejection.
    ///
    /// The provider is not consistent about casing, so the match is
    /// case-insensitive.
    pub fn is_content_filter(&self) -> bool {
        self.code
            .as_deref()
            .is_some_and(|code| code.eq_ignore_ascii_case("content_filter"))
    }

    /// The verdicts nested under `innererror`, when present.
    pub fn content_filter_result(&self) -> Option<&ContentFilterResults> {
        self.innererror
            .as_ref()
            .and_then(|inner| inner.content_filter_result.as_ref())
    }
}
