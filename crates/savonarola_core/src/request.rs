//! Chat-completion request wire types.

use crate::ChatMessage;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A chat-completion request in the provider's wire format.
///
/// The deployment name rides in the request URL, not the body, so there is
/// no `model` field. Unset optionals are omitted from the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Builder)]
pub struct ChatCompletionRequest {
    /// Conversation messages, in order
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature (0.0 - 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Nucleus-sampling factor
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub top_p: Option<f32>,
    /// Opaque per-call correlation identifier, for provider-side traceability only
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub user: Option<String>,
    /// Requested output format
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub response_format: Option<ResponseFormat>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub max_tokens: Option<u32>,
}

/// Requested output format for the completion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Plain text output
    Text,
    /// JSON object output
    JsonObject,
}
