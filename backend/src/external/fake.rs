//! Scripted model for testing.
//!
//! Replies are returned in the order they were queued and every request is
//! recorded, so tests can assert on the exact prompts that were sent.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::external::model::{GenerationRequest, GenerativeModel};

#[derive(Debug, Default)]
pub struct FakeModel {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl FakeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    /// Queue a failed call
    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for FakeModel {
    async fn generate(&self, request: GenerationRequest) -> AppResult<String> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(AppError::ModelError(message)),
            None => Err(AppError::ModelError("no scripted reply".to_string())),
        }
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}
