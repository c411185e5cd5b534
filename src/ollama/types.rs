//! Wire types for the Ollama HTTP API
//!
//! Only the fields this crate reads are modelled. Response schemas are
//! pinned: embeddings come back under `embedding`, chat replies under
//! `message`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One role/content pair in a chat request or reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// POST /api/embeddings body
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EmbeddingRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
}

/// POST /api/embeddings reply
#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingResponse {
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

/// POST /api/chat body
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub stream: bool,
}

/// POST /api/chat reply (non-streaming)
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

/// GET /api/tags reply
#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagInfo {
    pub name: String,
}

/// GET /api/version reply
#[derive(Debug, Deserialize)]
pub(crate) struct VersionResponse {
    pub version: String,
}
