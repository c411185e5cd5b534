//! ollamarag - retrieval-augmented generation against a local Ollama server
//!
//! Embeds a small fixed corpus into an in-memory vector collection, then
//! answers questions by retrieving the closest documents and passing them
//! to a chat model as context.
//!
//! # Architecture
//!
//! - **ollama**: embedding and chat HTTP client behind the `Embedder` and
//!   `ChatModel` traits
//! - **vector_db**: named in-process collections with cosine search
//! - **rag**: ingestion and the query path

pub mod errors;
pub mod ollama;
pub mod vector_db;
pub mod rag;

// Re-export commonly used types
pub use errors::{RagError, Result};

pub mod check;
pub mod cli;
pub mod config;
pub mod logging;
