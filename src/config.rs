//! Configuration management for ollamarag
//!
//! TOML configuration with built-in defaults and validation.
//! Location: ~/.ollamarag/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Verbosity;
use crate::errors::{RagError, Result};
use crate::rag::RagSettings;

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub rag: RagSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Ollama connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// quiet | normal | verbose | very_verbose
    pub verbosity: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 11434,
            timeout_secs: 300,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbosity: "normal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RagError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| RagError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, or built-in defaults when absent
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// ~/.ollamarag/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ollamarag").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ollama.host.trim().is_empty() {
            return Err(RagError::Config("ollama.host must not be empty".to_string()));
        }

        if self.ollama.timeout_secs == 0 {
            return Err(RagError::Config(
                "ollama.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.rag.embedding_model.trim().is_empty() {
            return Err(RagError::Config(
                "rag.embedding_model must not be empty".to_string(),
            ));
        }

        if self.rag.chat_model.trim().is_empty() {
            return Err(RagError::Config("rag.chat_model must not be empty".to_string()));
        }

        if self.rag.collection.trim().is_empty() {
            return Err(RagError::Config("rag.collection must not be empty".to_string()));
        }

        if Verbosity::parse(&self.logging.verbosity).is_none() {
            return Err(RagError::Config(format!(
                "Invalid verbosity level: {}",
                self.logging.verbosity
            )));
        }

        Ok(())
    }

    /// Get Ollama base URL
    pub fn ollama_url(&self) -> String {
        format!("http://{}:{}", self.ollama.host, self.ollama.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.ollama.timeout_secs)
    }
}
