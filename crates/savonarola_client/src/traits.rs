//! Trait seam for chat-completion backends.

use async_trait::async_trait;
use savonarola_core::{ChatCompletionRequest, ChatCompletionResponse};
use savonarola_error::ChatError;

/// Core trait a chat-completion backend must implement.
///
/// This is the seam the HTTP surface and the tests depend on; the
/// [`AzureChatClient`](crate::AzureChatClient) is the production
/// implementation. The backend is stateless from the caller's perspective
/// and safe for concurrent use by many in-flight calls.
#[async_trait]
pub trait ChatCompletions: Send + Sync {
    /// Send a chat-completion request and await the provider's verdict.
    ///
    /// This is the single suspension point of a gateway call; dropping the
    /// returned future must abort the outbound request.
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ChatError>;

    /// Provider name (e.g., "azure-openai").
    fn provider_name(&self) -> &'static str;

    /// Deployment or model identifier requests are routed to.
    fn model_name(&self) -> &str;
}
