//! Pre-flight checks against the Ollama server

use crate::errors::{RagError, Result};
use crate::ollama::OllamaClient;
use crate::rag::RagSettings;

/// Server version and availability of the configured models
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub version: String,
    pub embedding_model_installed: bool,
    pub chat_model_installed: bool,
}

impl CheckReport {
    pub fn is_ready(&self) -> bool {
        self.embedding_model_installed && self.chat_model_installed
    }

    /// `ollama pull` commands for every missing model
    pub fn missing_models<'a>(&self, settings: &'a RagSettings) -> Vec<&'a str> {
        let mut missing = Vec::new();
        if !self.embedding_model_installed {
            missing.push(settings.embedding_model.as_str());
        }
        if !self.chat_model_installed {
            missing.push(settings.chat_model.as_str());
        }
        missing
    }
}

/// Query the server version and installed models.
///
/// Fails when the server is unreachable.
pub async fn run(client: &OllamaClient, settings: &RagSettings) -> Result<CheckReport> {
    if !client.health_check().await {
        return Err(RagError::OllamaApi(format!(
            "Ollama is not reachable at {}",
            client.base_url()
        )));
    }

    let version = client.version().await?;
    let embedding_model_installed = client.has_model(&settings.embedding_model).await?;
    let chat_model_installed = client.has_model(&settings.chat_model).await?;

    Ok(CheckReport {
        version,
        embedding_model_installed,
        chat_model_installed,
    })
}
