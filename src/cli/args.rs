//! Command-line argument parsing for ollamarag
//!
//! Provides clap-based CLI with subcommands and verbosity control.
//! Flags override values from the configuration file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// ollamarag - answer questions from a small corpus with a local Ollama model
#[derive(Parser, Debug)]
#[command(name = "ollamarag")]
#[command(version)]
#[command(about = "Retrieval-augmented answers from a local Ollama model", long_about = None)]
pub struct Args {
    /// Questions to answer (the built-in demo questions when omitted)
    #[arg(value_name = "QUESTION")]
    pub questions: Vec<String>,

    /// Ollama model used to generate answers
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama model used to embed documents and questions
    #[arg(long)]
    pub embed_model: Option<String>,

    /// Name of the in-memory collection
    #[arg(long)]
    pub collection: Option<String>,

    /// Ollama host
    #[arg(long)]
    pub host: Option<String>,

    /// Ollama port
    #[arg(long)]
    pub port: Option<u16>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only warnings, errors and answers)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Check that Ollama is reachable and both models are installed
    Check,

    /// Ingest the corpus, then answer questions typed at a prompt
    Chat,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Verbosity from flags, falling back to the configured default
    pub fn verbosity(&self, config: &Config) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::parse(&config.logging.verbosity).unwrap_or(Verbosity::Normal),
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        }
    }

    /// Check flag combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_some() && !self.questions.is_empty() {
            return Err("Cannot specify questions with a subcommand.".to_string());
        }

        if self.questions.iter().any(|q| q.trim().is_empty()) {
            return Err("Questions must not be empty.".to_string());
        }

        Ok(())
    }

    /// Overlay command-line overrides onto the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.rag.chat_model = model.clone();
        }
        if let Some(model) = &self.embed_model {
            config.rag.embedding_model = model.clone();
        }
        if let Some(collection) = &self.collection {
            config.rag.collection = collection.clone();
        }
        if let Some(host) = &self.host {
            config.ollama.host = host.clone();
        }
        if let Some(port) = self.port {
            config.ollama.port = port;
        }
    }
}

impl Verbosity {
    /// Parse the configuration file spelling
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }
}
