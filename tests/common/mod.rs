//! Scripted stand-ins for the Ollama embedding and chat endpoints

use async_trait::async_trait;
use ollamarag::ollama::{ChatMessage, ChatModel, Embedder};
use ollamarag::{RagError, Result};
use std::sync::Mutex;

/// Keyword features; the last dimension is a constant bias so no vector is zero
const FEATURES: [&str; 10] = [
    "related",
    "camel",
    "tall",
    "grow",
    "domesticated",
    "weigh",
    "vegetarian",
    "eat",
    "live",
    "years",
];

/// Deterministic bag-of-keywords embedder
#[derive(Default)]
pub struct KeywordEmbedder {
    /// Texts containing any of these fail with an API error
    pub fail_on: Vec<&'static str>,
    /// Texts containing any of these get a one-dimensional vector
    pub short_on: Vec<&'static str>,
    /// Return an empty-embedding error for every call
    pub empty: bool,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl KeywordEmbedder {
    pub fn failing_on(fail_on: Vec<&'static str>) -> Self {
        Self {
            fail_on,
            ..Default::default()
        }
    }

    pub fn short_on(short_on: Vec<&'static str>) -> Self {
        Self {
            short_on,
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self {
            empty: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Embedder for KeywordEmbedder {
    async fn embed(&self, model: &str, text: &str) -> Result<Vec<f32>> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), text.to_string()));

        if self.empty {
            return Err(RagError::EmptyEmbedding {
                model: model.to_string(),
            });
        }

        if self.fail_on.iter().any(|needle| text.contains(needle)) {
            return Err(RagError::OllamaApi("HTTP 500: model crashed".to_string()));
        }

        if self.short_on.iter().any(|needle| text.contains(needle)) {
            return Ok(vec![1.0]);
        }

        let lower = text.to_lowercase();
        let mut vector: Vec<f32> = FEATURES
            .iter()
            .map(|f| lower.matches(f).count() as f32)
            .collect();
        vector.push(0.1);
        Ok(vector)
    }
}

/// Chat model that records every request
pub struct RecordingChat {
    reply: std::result::Result<String, String>,
    pub requests: Mutex<Vec<(String, Vec<ChatMessage>)>>,
}

impl RecordingChat {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<(String, Vec<ChatMessage>)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatModel for RecordingChat {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), messages.to_vec()));

        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(RagError::OllamaApi(message.clone())),
        }
    }
}
