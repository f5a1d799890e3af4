//! Error types for the outbound chat-completion call.

use savonarola_core::ContentFilterResults;

/// Error kinds for chat-completion operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChatErrorKind {
    /// Transport failure before a provider verdict was received.
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Provider returned an error unrelated to content policy.
    #[display("Provider error ({}): {}", status, message)]
    Api {
        /// HTTP status returned by the provider
        status: u16,
        /// Raw provider error message
        message: String,
    },

    /// Provider rejected the request itself for content-policy reasons.
    #[display("Request rejected by content filter: {}", message)]
    ContentFilter {
        /// Per-category verdicts extracted from the structured error body
        results: ContentFilterResults,
        /// Raw provider error message
        message: String,
    },

    /// Failed to deserialize a successful response body.
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),
}

/// Chat error with source location tracking.
///
/// # Examples
///
/// ```
/// use savonarola_error::{ChatError, ChatErrorKind};
///
/// let err = ChatError::new(ChatErrorKind::Deserialization("unexpected EOF".into()));
/// assert!(format!("{}", err).contains("unexpected EOF"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Chat Error: {} at line {} in {}", kind, line, file)]
pub struct ChatError {
    /// The error kind
    pub kind: ChatErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ChatError {
    /// Create a new ChatError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ChatErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
