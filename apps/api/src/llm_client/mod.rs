/// LLM Client: the single point of entry for text generation in CareerCraft.
///
/// Talks to an Ollama server. No other module may call the backend directly;
/// everything goes through the [`TextGenerator`] seam so handlers can be
/// exercised with a stub.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod stub;

const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("backend unavailable after {attempts} attempts")]
    Unavailable { attempts: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Sampling knobs for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// True when the backend answers and has the configured model.
    async fn is_available(&self) -> bool;

    /// Raw completion text for `prompt`.
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String, LlmError>;

    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Ollama-backed [`TextGenerator`] with timeout and retry.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists the backend's models and checks that ours is among them.
    pub async fn check_connection(&self) -> Result<bool, LlmError> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let tags: TagsResponse = response.json().await?;
        Ok(tags
            .models
            .iter()
            .any(|tag| model_matches(&tag.name, &self.model)))
    }

    /// Calls `/api/generate`. Retries transport errors and 5xx responses with
    /// exponential backoff; other failures are returned immediately.
    async fn call(&self, prompt: &str, params: GenerationParams) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: params.temperature,
                num_predict: params.max_tokens,
            },
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(format!("{}/api/generate", self.base_url))
                .json(&request_body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM backend returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<OllamaError>(&body)
                    .map(|e| e.error)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let generated: GenerateResponse = response.json().await?;

            debug!(
                "LLM call succeeded: prompt_tokens={:?}, output_tokens={:?}",
                generated.prompt_eval_count, generated.eval_count
            );

            if generated.response.trim().is_empty() {
                return Err(LlmError::EmptyContent);
            }
            return Ok(generated.response);
        }

        Err(last_error.unwrap_or(LlmError::Unavailable {
            attempts: MAX_ATTEMPTS,
        }))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn is_available(&self) -> bool {
        match self.check_connection().await {
            Ok(available) => available,
            Err(e) => {
                warn!("LLM availability check failed: {e}");
                false
            }
        }
    }

    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String, LlmError> {
        self.call(prompt, params).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// `gemma2:2b` matches `gemma2:2b`; an untagged `llama3` matches `llama3:latest`.
fn model_matches(listed: &str, wanted: &str) -> bool {
    if listed == wanted {
        return true;
    }
    !wanted.contains(':') && listed.split(':').next() == Some(wanted)
}
