//! Project description suggestions from an OpenAI-compatible model.
//!
//! Results are cached in Redis keyed by a hash of the request, so asking
//! twice for the same project does not hit the model again within the TTL.

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use portfolio_common::openai::{ChatRequest, Message, OpenAiClient};
use portfolio_common::redis::RedisCache;

use crate::error::AppError;

const KEY_PREFIX: &str = "portfolio:v1:description:";
const CACHE_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DescriptionRequest {
    /// Project title.
    pub title: String,
    /// Project category, e.g. "NLP" or "Computer Vision".
    pub category: String,
    /// Technologies used, in display order.
    pub tech: Vec<String>,
    /// Comma-separated keywords describing the project.
    pub keywords: String,
}

pub struct DescriptionGenerator {
    openai: Arc<OpenAiClient>,
    model: String,
    cache: RedisCache,
}

impl DescriptionGenerator {
    pub fn new(openai: Arc<OpenAiClient>, model: String, cache: RedisCache) -> Self {
        Self {
            openai,
            model,
            cache,
        }
    }

    /// Returns a one-to-two sentence description for the project.
    pub async fn generate(&self, request: &DescriptionRequest) -> Result<String, AppError> {
        if request.title.trim().is_empty() {
            return Err(AppError::InvalidRequest("title must not be empty".to_string()));
        }

        let key = cache_key(request);
        if let Some(cached) = self.cache.get(&key).await {
            info!(title = %request.title, "description cache hit");
            return Ok(cached);
        }

        let chat = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(
                    "You write portfolio copy for an AI engineer. Reply with the description only.",
                ),
                Message::user(build_prompt(request)),
            ],
            temperature: Some(0.7),
            max_tokens: Some(160),
        };
        let description = self.openai.complete(&chat).await?;
        info!(title = %request.title, model = %self.model, "description generated");

        self.cache
            .set_with_ttl(&key, &description, CACHE_TTL_SECS)
            .await;
        Ok(description)
    }
}

pub fn build_prompt(request: &DescriptionRequest) -> String {
    format!(
        "Write a compelling one to two sentence description of this portfolio project that \
highlights its value and accomplishments.\n\n\
Project Title: {}\n\
Category: {}\n\
Tech Stack: {}\n\
Keywords: {}\n",
        request.title.trim(),
        request.category.trim(),
        request.tech.join(", "),
        request.keywords.trim(),
    )
}

fn cache_key(request: &DescriptionRequest) -> String {
    let tech = request.tech.join(",");
    let mut hasher = Sha256::new();
    for part in [
        request.title.as_str(),
        request.category.as_str(),
        tech.as_str(),
        request.keywords.as_str(),
    ] {
        hasher.update(part.as_bytes());
        hasher.update(b"|");
    }
    format!("{KEY_PREFIX}{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use portfolio_common::openai::OpenAiClientConfig;

    use super::*;

    fn request(keywords: &str) -> DescriptionRequest {
        DescriptionRequest {
            title: "RAG Support Bot".to_string(),
            category: "NLP".to_string(),
            tech: vec!["LlamaIndex".to_string(), "Qdrant".to_string()],
            keywords: keywords.to_string(),
        }
    }

    #[test]
    fn prompt_lists_every_input() {
        let prompt = build_prompt(&request("support, retrieval"));
        assert!(prompt.contains("Project Title: RAG Support Bot"));
        assert!(prompt.contains("Category: NLP"));
        assert!(prompt.contains("Tech Stack: LlamaIndex, Qdrant"));
        assert!(prompt.contains("Keywords: support, retrieval"));
    }

    #[test]
    fn cache_key_tracks_the_request() {
        assert_eq!(cache_key(&request("a")), cache_key(&request("a")));
        assert_ne!(cache_key(&request("a")), cache_key(&request("b")));
        assert!(cache_key(&request("a")).starts_with(KEY_PREFIX));
    }

    #[tokio::test]
    async fn blank_title_is_rejected_before_any_call() {
        let openai = Arc::new(OpenAiClient::new(OpenAiClientConfig::default()).unwrap());
        let generator =
            DescriptionGenerator::new(openai, "test-model".to_string(), RedisCache::disabled());
        let mut req = request("x");
        req.title = "  ".to_string();
        assert!(matches!(
            generator.generate(&req).await,
            Err(AppError::InvalidRequest(_))
        ));
    }
}
