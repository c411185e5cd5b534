//! Ollama API client
//!
//! Non-streaming HTTP calls against a local Ollama server:
//! - POST /api/embeddings
//! - POST /api/chat
//! - GET /api/version, GET /api/tags for health checks

use crate::errors::{RagError, Result};
use crate::ollama::provider::{ChatModel, Embedder};
use crate::ollama::types::{
    ChatMessage, ChatRequest, ChatResponse, EmbeddingRequest, EmbeddingResponse, TagsResponse,
    VersionResponse,
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Default request timeout; generation on CPU-only hosts can be slow
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Timeout for the version and health endpoints
const LIVENESS_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the Ollama embedding and chat endpoints
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create client against the default local endpoint
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_OLLAMA_URL, DEFAULT_TIMEOUT)
    }

    /// Create client with custom endpoint and request timeout
    pub fn with_config(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RagError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if Ollama is reachable
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/version", self.base_url);

        match self.client.get(&url).timeout(LIVENESS_TIMEOUT).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Server version string
    pub async fn version(&self) -> Result<String> {
        let url = format!("{}/api/version", self.base_url);
        let response = self.client.get(&url).timeout(LIVENESS_TIMEOUT).send().await?;
        let version: VersionResponse = check_status(response).await?.json().await?;
        Ok(version.version)
    }

    /// List installed model names
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self.client.get(&url).send().await?;
        let tags: TagsResponse = check_status(response).await?.json().await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Check whether a model is installed, treating an untagged name as `:latest`
    pub async fn has_model(&self, name: &str) -> Result<bool> {
        let installed = self.list_models().await?;
        Ok(installed.iter().any(|m| model_matches(m, name)))
    }
}

#[async_trait]
impl Embedder for OllamaClient {
    async fn embed(&self, model: &str, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/api/embeddings", self.base_url);
        let request = EmbeddingRequest { model, prompt: text };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::OllamaApi(format!("Failed to send request: {}", e)))?;

        let parsed: EmbeddingResponse = check_status(response).await?.json().await?;

        match parsed.embedding {
            Some(vector) if !vector.is_empty() => {
                debug!(model, dimension = vector.len(), "received embedding");
                Ok(vector)
            }
            _ => Err(RagError::EmptyEmbedding {
                model: model.to_string(),
            }),
        }
    }
}

#[async_trait]
impl ChatModel for OllamaClient {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model,
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::OllamaApi(format!("Failed to send request: {}", e)))?;

        let parsed: ChatResponse = check_status(response).await?.json().await?;

        parsed
            .message
            .map(|m| m.content)
            .ok_or_else(|| RagError::MissingMessage {
                model: model.to_string(),
            })
    }
}

/// Turn a non-success status into an API error carrying the body
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(api_error(status, &error_text))
}

fn api_error(status: StatusCode, body: &str) -> RagError {
    RagError::OllamaApi(format!("HTTP {}: {}", status, body))
}

fn model_matches(installed: &str, wanted: &str) -> bool {
    installed == wanted || (!wanted.contains(':') && installed == format!("{}:latest", wanted))
}
