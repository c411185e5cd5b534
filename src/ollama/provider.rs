//! Provider seams used by the RAG layer
//!
//! Ingestion and querying only see these traits, so any backend that can
//! turn text into a vector or messages into a reply can stand in for Ollama.

use crate::errors::Result;
use crate::ollama::types::ChatMessage;
use async_trait::async_trait;

/// Turns text into an embedding vector
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text with the named model.
    ///
    /// Implementations must return `RagError::EmptyEmbedding` instead of an
    /// empty vector.
    async fn embed(&self, model: &str, text: &str) -> Result<Vec<f32>>;
}

/// Produces a single chat completion
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send the messages to the named model and return the reply content
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String>;
}
