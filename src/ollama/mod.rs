//! Ollama provider: HTTP client, wire types and the traits the RAG layer uses

pub mod client;
pub mod provider;
pub mod types;

pub use client::OllamaClient;
pub use provider::{ChatModel, Embedder};
pub use types::{ChatMessage, Role};
