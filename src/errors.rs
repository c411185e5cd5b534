//! Error types for ollamarag
//!
//! Provider, vector store and configuration failures share one error type
//! so the RAG layer can decide which ones become user-facing strings.

use thiserror::Error;

/// Main error type for ingestion and query operations
#[derive(Error, Debug)]
pub enum RagError {
    /// Ollama answered with a non-success status
    #[error("Ollama API error: {0}")]
    OllamaApi(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedding response carried no vector
    #[error("No embeddings found in response from model {model}")]
    EmptyEmbedding { model: String },

    /// Chat response carried no message
    #[error("No message found in chat response from model {model}")]
    MissingMessage { model: String },

    #[error("Collection '{0}' does not exist")]
    CollectionNotFound(String),

    #[error("Collection '{0}' already exists")]
    CollectionExists(String),

    #[error("ID '{id}' already exists in collection '{collection}'")]
    DuplicateId { collection: String, id: String },

    /// Vector length differs from the collection dimension
    #[error("Embedding dimension {actual} does not match collection dimension {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Cannot store an empty embedding for ID '{0}'")]
    EmptyVector(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for ollamarag operations
pub type Result<T> = std::result::Result<T, RagError>;

impl From<anyhow::Error> for RagError {
    fn from(err: anyhow::Error) -> Self {
        RagError::Generic(err.to_string())
    }
}
