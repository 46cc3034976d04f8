//! Mock Model Client for testing.
//!
//! Configurable implementation of the ModelClient port, allowing tests to
//! run the pipeline and HTTP layer without a real model API.
//!
//! # Features
//!
//! - Pre-configured replies (consumed in order)
//! - Error injection
//! - Recorded prompts for verification
//! - Simulated latency
//!
//! # Example
//!
//! ```ignore
//! let client = MockModelClient::new().with_reply(r#"{"urgency":"soon"}"#);
//! let output = client.generate("prompt").await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ModelClient, ModelError};

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this completion text.
    Text(String),
    /// Fail with this error.
    Error(ModelError),
}

/// Mock model client for testing.
#[derive(Debug, Clone, Default)]
pub struct MockModelClient {
    /// Replies consumed in order; the last one repeats when exhausted.
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Prompts received, for verification.
    prompts: Arc<Mutex<Vec<String>>>,
    /// Simulated latency per request.
    delay: Duration,
}

impl MockModelClient {
    /// Creates a new mock with no configured replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a completion reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    /// Queues an error reply.
    pub fn with_error(self, error: ModelError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this client.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Returns all prompts received so far.
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Gets the next reply, or a default empty object.
    fn next_reply(&self) -> MockReply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies
                .front()
                .cloned()
                .unwrap_or_else(|| MockReply::Text("{}".to_string()))
        }
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Text(text) => Ok(text),
            MockReply::Error(error) => Err(error),
        }
    }
}
