//! Mock LLM Provider for testing
//!
//! This module provides a mock provider that returns queued or canned responses.

use crate::completion::{CompletionRequest, CompletionResponse, TokenUsage};
use crate::error::Result;
use crate::provider::LlmProvider;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A mock LLM provider that returns queued responses or a default one.
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<CompletionResponse>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a new mock provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response to the queue.
    pub fn add_response(&self, response: CompletionResponse) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn available_models(&self) -> Vec<String> {
        vec!["mock-model".to_string()]
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        let mut responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        Ok(responses.pop_front().unwrap_or_else(|| CompletionResponse {
            content: "mock response".to_string(),
            usage: Some(TokenUsage::new(10, 100)),
            finish_reason: Some("stop".to_string()),
            model: "mock-model".to_string(),
        }))
    }
}
