//! Core data types for the Savonarola demo gateway.
//!
//! This crate defines the chat-completion wire types exchanged with the
//! provider, the content-filter verdict model, the typed provider error
//! payload, and the fixed demo scenario table. Everything here is a
//! request-scoped value: constructed for a single call, never mutated,
//! never cached.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error_payload;
mod filter;
mod message;
mod request;
mod response;
mod role;
mod scenario;

pub use error_payload::{ApiErrorBody, ApiErrorDetail, ApiInnerError};
pub use filter::{ContentFilterResult, ContentFilterResults, FilterCategory, Severity};
pub use message::ChatMessage;
pub use request::{ChatCompletionRequest, ChatCompletionRequestBuilder, ResponseFormat};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, FinishReason, Usage};
pub use role::Role;
pub use scenario::Scenario;
