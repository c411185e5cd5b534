// Query path: embed the question, retrieve context, ask the chat model
use serde::Serialize;
use tracing::{error, info};

use crate::errors::{RagError, Result};
use crate::ollama::{ChatModel, Embedder};
use crate::rag::prompt::{build_context, build_messages};
use crate::rag::{RagSettings, RETRIEVAL_DEPTH};
use crate::vector_db::{Collection, QueryResult};

/// Reply when the query embedding came back empty
pub const EMBEDDING_FAILED_REPLY: &str = "Error: Could not generate embeddings for your query.";

/// Reply when retrieval found nothing to ground an answer on
pub const NO_CONTEXT_REPLY: &str = "I don't have enough information to answer that question.";

/// Prefix of every reply produced from an unexpected failure
pub const ERROR_PREFIX: &str = "Error processing query: ";

/// A grounded answer
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub query: String,
    /// Retrieved documents, best match first
    pub sources: Vec<QueryResult>,
    pub reply: String,
}

/// Answer `query` from the collection, propagating failures.
///
/// Returns `Ok(None)` when retrieval yields no documents; the chat model is
/// not called in that case.
pub async fn answer(
    collection: &Collection,
    embedder: &dyn Embedder,
    chat: &dyn ChatModel,
    settings: &RagSettings,
    query: &str,
) -> Result<Option<Answer>> {
    info!("Generating embedding for query: {}", query);
    let query_embedding = embedder.embed(&settings.embedding_model, query).await?;

    info!("Querying vector database for relevant documents...");
    let sources = collection.query(&query_embedding, RETRIEVAL_DEPTH)?;
    if sources.is_empty() {
        return Ok(None);
    }

    let documents: Vec<&str> = sources.iter().map(|r| r.document.as_str()).collect();
    let context = build_context(&documents);
    info!("Found relevant documents: {}", context);

    info!("Generating response using {}...", settings.chat_model);
    let messages = build_messages(&context, query);
    let reply = chat.chat(&settings.chat_model, &messages).await?;

    Ok(Some(Answer {
        query: query.to_string(),
        sources,
        reply,
    }))
}

/// Answer `query` as a user-facing string; failures become error text
pub async fn query_and_respond(
    collection: &Collection,
    embedder: &dyn Embedder,
    chat: &dyn ChatModel,
    settings: &RagSettings,
    query: &str,
) -> String {
    match answer(collection, embedder, chat, settings, query).await {
        Ok(Some(answer)) => answer.reply,
        Ok(None) => NO_CONTEXT_REPLY.to_string(),
        Err(e @ RagError::EmptyEmbedding { .. }) => {
            error!("{}", e);
            EMBEDDING_FAILED_REPLY.to_string()
        }
        Err(e) => {
            error!("Error processing query: {}", e);
            format!("{}{}", ERROR_PREFIX, e)
        }
    }
}
