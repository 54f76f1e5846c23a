//! Minimal client for an OpenAI-compatible `/chat/completions` endpoint.
//!
//! Transient failures (timeouts, connection errors, 429 and 5xx) are retried
//! with capped exponential backoff plus jitter.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct OpenAiClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub max_error_body_bytes: usize,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(4),
            max_error_body_bytes: 8 * 1024,
        }
    }
}

impl OpenAiClientConfig {
    /// Optional:
    /// - `OPENAI_BASE_URL`
    /// - `OPENAI_API_KEY`
    /// - `OPENAI_TIMEOUT_SECS`
    /// - `OPENAI_MAX_RETRIES`
    /// - `OPENAI_RETRY_INITIAL_MS`, `OPENAI_RETRY_MAX_MS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("OPENAI_BASE_URL").unwrap_or(defaults.base_url);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            timeout: env_parse("OPENAI_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_retries: env_parse("OPENAI_MAX_RETRIES").unwrap_or(defaults.max_retries),
            initial_backoff: env_parse("OPENAI_RETRY_INITIAL_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.initial_backoff),
            max_backoff: env_parse("OPENAI_RETRY_MAX_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.max_backoff),
            max_error_body_bytes: defaults.max_error_body_bytes,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAiClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("completion contained no text")]
    EmptyCompletion,
}

impl OpenAiClientError {
    fn is_transient(&self) -> bool {
        match self {
            Self::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Upstream { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            Self::EmptyCompletion => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Trimmed text of the first choice, if it has any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct OpenAiClient {
    config: OpenAiClientConfig,
    http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiClientConfig) -> Result<Self, OpenAiClientError> {
        let http = reqwest::Client::builder()
            .user_agent("portfolio-server")
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Runs a chat completion and returns the first choice's text.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, OpenAiClientError> {
        let mut attempt: u32 = 0;
        loop {
            match self.send(request).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    let delay = backoff(&self.config, attempt);
                    warn!(
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis(),
                        error = %e,
                        "chat completion failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send(&self, request: &ChatRequest) -> Result<String, OpenAiClientError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let mut builder = self.http.post(&url).json(request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            let body = &body[..body.len().min(self.config.max_error_body_bytes)];
            return Err(OpenAiClientError::Upstream {
                status,
                message: error_message(body),
            });
        }
        let parsed: ChatResponse = resp.json().await?;
        debug!(model = %request.model, choices = parsed.choices.len(), "chat completion received");
        parsed
            .text()
            .map(str::to_string)
            .ok_or(OpenAiClientError::EmptyCompletion)
    }
}

/// Prefers the `error.message` of an OpenAI-style envelope over the raw body.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|env| env.error.message)
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

fn backoff(config: &OpenAiClientConfig, attempt: u32) -> Duration {
    let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
    let base = config
        .initial_backoff
        .saturating_mul(factor)
        .min(config.max_backoff);
    let jitter_cap = (base.as_millis() as u64 / 4).max(1);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64)
        .unwrap_or(0);
    base + Duration::from_millis(nanos % (jitter_cap + 1))
}
