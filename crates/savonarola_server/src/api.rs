//! HTTP API for the demo gateway.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use savonarola_client::ChatCompletions;
use savonarola_core::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    FinishReason, ResponseFormat, Scenario,
};
use savonarola_error::{ChatError, ChatErrorKind, ServerError, ServerErrorKind};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Chat-completion backend handling the outbound call.
    pub chat: Arc<dyn ChatCompletions>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(chat: Arc<dyn ChatCompletions>) -> Self {
        Self { chat }
    }
}

/// Creates the API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/demo/test", get(demo_test))
        .with_state(state)
}

/// Bind and serve the API until the listener terminates.
pub async fn serve(addr: SocketAddr, state: ApiState) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind(format!("{}: {}", addr, e)))
    })?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Query parameters for the demo endpoint.
///
/// A missing, non-numeric, or negative `case` fails extraction and is
/// rejected by the framework before the handler runs.
#[derive(Debug, Deserialize)]
struct TestParams {
    case: u32,
}

/// Run one fixed demo scenario against the chat deployment.
#[instrument(skip(state))]
async fn demo_test(State(state): State<ApiState>, Query(params): Query<TestParams>) -> Response {
    if params.case < 1 {
        return (
            StatusCode::BAD_REQUEST,
            "case must be a positive integer".to_string(),
        )
            .into_response();
    }

    let Some(scenario) = Scenario::lookup(params.case) else {
        // Syntactically valid selector with no mapping: a server fault, not
        // a silent default.
        tracing::error!("No scenario mapped for case {}", params.case);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("unsupported scenario: {}", params.case),
        )
            .into_response();
    };

    let request = match build_demo_request(&scenario) {
        Ok(request) => request,
        Err(error) => {
            tracing::error!("Failed to build chat request: {}", error);
            return (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response();
        }
    };

    match state.chat.chat_completion(request).await {
        Ok(response) => completion_response(response).into_response(),
        Err(error) => chat_error_response(error).into_response(),
    }
}

/// Build the outbound request for a scenario.
///
/// Generation parameters are fixed; the `user` correlation identifier is
/// freshly random per call and stays between the gateway and the provider.
fn build_demo_request(scenario: &Scenario) -> Result<ChatCompletionRequest, ServerError> {
    ChatCompletionRequestBuilder::default()
        .messages(vec![
            ChatMessage::system(scenario.system_prompt()),
            ChatMessage::user(scenario.user_message()),
        ])
        .temperature(Some(1.0))
        .top_p(Some(1.0))
        .user(Some(Uuid::new_v4().to_string()))
        .response_format(Some(ResponseFormat::Text))
        .max_tokens(Some(1000))
        .build()
        .map_err(|e| ServerError::new(ServerErrorKind::Request(e.to_string())))
}

/// Map a successful provider response onto the HTTP contract.
fn completion_response(response: ChatCompletionResponse) -> (StatusCode, String) {
    let Some(choice) = response.choices.first() else {
        return (StatusCode::BAD_REQUEST, "No choices in response".to_string());
    };

    let finish = choice.finish_reason.as_deref().map(FinishReason::parse);
    if finish == Some(FinishReason::ContentFilter) {
        if let Some((category, verdict)) = choice
            .content_filter_results
            .as_ref()
            .and_then(|results| results.first_flagged())
        {
            return (
                StatusCode::BAD_REQUEST,
                format!(
                    "Result → {} speech detected. Level '{}'.",
                    category, verdict.severity
                ),
            );
        }
        // Filter finish reason with no flagged category: fall through with
        // whatever content is present.
    }

    let content = choice.message.content.clone().unwrap_or_default();
    (StatusCode::OK, content)
}

/// Map a provider failure onto the HTTP contract.
fn chat_error_response(error: ChatError) -> (StatusCode, String) {
    match error.kind {
        ChatErrorKind::ContentFilter { results, message } => match results.first_flagged() {
            Some((category, verdict)) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Request → {} speech detected. Level '{}'.",
                    category, verdict.severity
                ),
            ),
            // Code matched but no category tripped: surface the raw message.
            None => (StatusCode::BAD_REQUEST, message),
        },
        ChatErrorKind::Api { message, .. } => (StatusCode::BAD_REQUEST, message),
        ChatErrorKind::Http(message) | ChatErrorKind::Deserialization(message) => {
            (StatusCode::BAD_REQUEST, message)
        }
    }
}
