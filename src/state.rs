//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries no per-request data: requests are independent and stateless. The
//! only shared resource is the LLM extractor, built once at startup and
//! reused read-only (its HTTP client pools connections internally).

use std::sync::Arc;

use crate::extract::LlmExtractor;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    /// LLM fallback. `None` if no API key is configured.
    pub extractor: Option<Arc<LlmExtractor>>,
}

impl AppState {
    #[must_use]
    pub fn new(extractor: Option<Arc<LlmExtractor>>) -> Self {
        Self { extractor }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::llm::LlmChat;
    use crate::llm::types::{ChatOptions, ChatResponse, LlmError, Message};

    /// Scripted LLM: pops one canned reply per call and counts calls.
    pub struct MockLlm {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        calls: AtomicUsize,
        last_request: Mutex<Option<(String, Vec<Message>, ChatOptions)>>,
    }

    impl MockLlm {
        #[must_use]
        pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self { replies: Mutex::new(replies), calls: AtomicUsize::new(0), last_request: Mutex::new(None) }
        }

        #[must_use]
        pub fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_owned())])
        }

        #[must_use]
        pub fn failing(err: LlmError) -> Self {
            Self::new(vec![Err(err)])
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_request(&self) -> Option<(String, Vec<Message>, ChatOptions)> {
            self.last_request.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn chat(
            &self,
            system: &str,
            messages: &[Message],
            options: ChatOptions,
        ) -> Result<ChatResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some((system.to_owned(), messages.to_vec(), options));
            let next = {
                let mut replies = self.replies.lock().unwrap();
                if replies.is_empty() {
                    Err(LlmError::Transport("mock replies exhausted".into()))
                } else {
                    replies.remove(0)
                }
            };
            next.map(|text| ChatResponse {
                text,
                model: "mock".into(),
                finish_reason: "stop".into(),
                prompt_tokens: 0,
                completion_tokens: 0,
            })
        }

        fn model(&self) -> &str {
            "mock"
        }
    }

    /// Extractor over a shared mock so tests can inspect calls afterwards.
    #[must_use]
    pub fn mock_extractor(llm: &Arc<MockLlm>) -> LlmExtractor {
        let chat: Arc<dyn LlmChat> = llm.clone();
        LlmExtractor::new(chat, ChatOptions::default())
    }

    /// App state with the LLM fallback disabled.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None)
    }

    /// App state whose LLM fallback is backed by `llm`.
    #[must_use]
    pub fn test_app_state_with_llm(llm: &Arc<MockLlm>) -> AppState {
        AppState::new(Some(Arc::new(mock_extractor(llm))))
    }
}
