// Retrieval-augmented generation over the built-in corpus
//
// Components:
// - corpus: fixed documents and demo questions
// - ingest: embed and store documents in a fresh collection
// - prompt: context block and chat messages
// - query: retrieve context and ask the chat model

pub mod corpus;
pub mod ingest;
pub mod prompt;
pub mod query;

use serde::{Deserialize, Serialize};

pub use corpus::{DEMO_QUESTIONS, DOCUMENTS};
pub use ingest::{setup_collection, IngestFailure, IngestReport};
pub use query::{answer, query_and_respond, Answer};

/// Number of documents retrieved per question
pub const RETRIEVAL_DEPTH: usize = 2;

pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";
pub const DEFAULT_CHAT_MODEL: &str = "gemma3";
pub const DEFAULT_COLLECTION: &str = "docs";

/// Models and collection used by ingestion and querying
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RagSettings {
    pub embedding_model: String,
    pub chat_model: String,
    pub collection: String,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self {
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}
