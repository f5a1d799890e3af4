// Mock chat-completion backend for server tests.
//
// Validates handler behavior without a network, and records enough about
// each call (count, last request, cancellation) to assert on.

use async_trait::async_trait;
use savonarola_client::ChatCompletions;
use savonarola_core::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, ContentFilterResults,
    Role,
};
use savonarola_error::{ChatError, ChatErrorKind};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

enum MockBehavior {
    Success(ChatCompletionResponse),
    Error(ChatErrorKind),
    /// Never resolves; used to observe cancellation.
    Pending,
}

pub struct MockChatClient {
    behavior: MockBehavior,
    calls: AtomicUsize,
    cancelled: Arc<AtomicBool>,
    last_request: Mutex<Option<ChatCompletionRequest>>,
}

impl MockChatClient {
    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            cancelled: Arc::new(AtomicBool::new(false)),
            last_request: Mutex::new(None),
        }
    }

    /// A backend that completes normally with the given text.
    pub fn new_success(content: &str) -> Self {
        Self::new(MockBehavior::Success(completion(content, "stop", None)))
    }

    /// A backend that returns the given response verbatim.
    pub fn new_response(response: ChatCompletionResponse) -> Self {
        Self::new(MockBehavior::Success(response))
    }

    /// A backend that fails every call with the given error kind.
    pub fn new_error(kind: ChatErrorKind) -> Self {
        Self::new(MockBehavior::Error(kind))
    }

    /// A backend whose call never resolves.
    pub fn new_pending() -> Self {
        Self::new(MockBehavior::Pending)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Whether a pending call was dropped before completing.
    pub fn was_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

/// Sets the flag when the in-flight call is dropped without completing.
struct CancelGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatCompletions for MockChatClient {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_request.lock().unwrap().replace(request);

        match &self.behavior {
            MockBehavior::Success(response) => Ok(response.clone()),
            MockBehavior::Error(kind) => Err(ChatError::new(kind.clone())),
            MockBehavior::Pending => {
                let _guard = CancelGuard {
                    flag: Arc::clone(&self.cancelled),
                };
                std::future::pending().await
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-deployment"
    }
}

/// A single-choice completion with the given content and finish reason.
pub fn completion(
    content: &str,
    finish_reason: &str,
    content_filter_results: Option<ContentFilterResults>,
) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: Some("chatcmpl-test".to_string()),
        model: Some("gpt-4".to_string()),
        choices: vec![Choice {
            index: 0,
            message: ChoiceMessage {
                role: Some(Role::Assistant),
                content: Some(content.to_string()),
            },
            finish_reason: Some(finish_reason.to_string()),
            content_filter_results,
        }],
        usage: None,
    }
}

/// A filtered completion: suppressed content plus per-category verdicts.
pub fn filtered_completion(results: ContentFilterResults) -> ChatCompletionResponse {
    let mut response = completion("", "content_filter", Some(results));
    response.choices[0].message.content = None;
    response
}
