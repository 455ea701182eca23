//! Canned [`TextGenerator`] for handler and orchestrator tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerationParams, LlmError, TextGenerator};

pub struct StubGenerator {
    available: bool,
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    /// Available backend that answers every prompt with `reply`.
    pub fn replying(reply: &str) -> Self {
        Self {
            available: true,
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Available backend whose generate call fails.
    pub fn failing() -> Self {
        Self {
            available: true,
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn offline() -> Self {
        Self {
            available: false,
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn is_available(&self) -> bool {
        self.available
    }

    async fn generate(&self, prompt: &str, _params: GenerationParams) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(LlmError::Api {
            status: 500,
            message: "stub failure".to_string(),
        })
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}
