//! Azure OpenAI chat-completion client.

use crate::{AzureConfig, ChatCompletions};
use async_trait::async_trait;
use savonarola_core::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};
use savonarola_error::{ChatError, ChatErrorKind};
use tracing::instrument;

/// Client for an Azure OpenAI chat deployment.
///
/// Cheap to clone; one instance serves all in-flight calls.
#[derive(Debug, Clone)]
pub struct AzureChatClient {
    config: AzureConfig,
    client: reqwest::Client,
}

impl AzureChatClient {
    /// Create a new client.
    #[instrument(skip(config), fields(endpoint = %config.endpoint(), deployment = %config.deployment()))]
    pub fn new(config: AzureConfig) -> Self {
        tracing::debug!("Creating Azure chat client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &AzureConfig {
        &self.config
    }

    /// The deployment's chat-completions route.
    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint().trim_end_matches('/'),
            self.config.deployment(),
            self.config.api_version(),
        )
    }

    /// Classify a non-success provider response.
    ///
    /// A parseable error body whose code marks a content-policy rejection
    /// and which carries the verdict object becomes `ContentFilter`;
    /// everything else, including a malformed body, degrades to the generic
    /// `Api` kind with the raw provider message.
    fn classify_error(status: u16, body: &str) -> ChatError {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => {
                let message = parsed
                    .error
                    .message
                    .clone()
                    .unwrap_or_else(|| body.to_string());

                if parsed.error.is_content_filter() {
                    if let Some(results) = parsed.error.content_filter_result() {
                        return ChatError::new(ChatErrorKind::ContentFilter {
                            results: *results,
                            message,
                        });
                    }
                }

                ChatError::new(ChatErrorKind::Api { status, message })
            }
            Err(_) => ChatError::new(ChatErrorKind::Api {
                status,
                message: body.to_string(),
            }),
        }
    }
}

#[async_trait]
impl ChatCompletions for AzureChatClient {
    #[instrument(skip(self, request), fields(deployment = %self.config.deployment()))]
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ChatError> {
        let url = self.completions_url();
        tracing::debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("api-key", self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                ChatError::new(ChatErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Provider returned error: {}", status);
            return Err(Self::classify_error(status.as_u16(), &body));
        }

        let result = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            ChatError::new(ChatErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!("Chat completion successful");
        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "azure-openai"
    }

    fn model_name(&self) -> &str {
        self.config.deployment()
    }
}
