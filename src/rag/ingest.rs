// Corpus ingestion: embed each document and store it in a fresh collection
use serde::Serialize;
use tracing::{error, info};

use crate::errors::Result;
use crate::ollama::Embedder;
use crate::rag::RagSettings;
use crate::vector_db::VectorDb;

/// A document that could not be stored
#[derive(Debug, Clone, Serialize)]
pub struct IngestFailure {
    pub index: usize,
    pub reason: String,
}

/// Outcome of one ingestion run
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    /// Number of documents stored
    pub added: usize,
    /// Documents skipped, in corpus order
    pub failures: Vec<IngestFailure>,
}

impl IngestReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Recreate the configured collection and populate it with document embeddings.
///
/// A same-named collection is dropped first. Documents are identified by
/// their position in `documents`. A failure on one document is logged and
/// recorded in the report; the remaining documents are still processed.
pub async fn setup_collection(
    db: &mut VectorDb,
    embedder: &dyn Embedder,
    settings: &RagSettings,
    documents: &[&str],
) -> Result<IngestReport> {
    let name = settings.collection.as_str();

    match db.delete_collection(name) {
        Ok(()) => info!("Deleted existing collection '{}'", name),
        Err(e) => info!("No existing collection to delete: {}", e),
    }

    db.create_collection(name)?;
    info!("Created new collection '{}'", name);

    let mut report = IngestReport::default();

    for (i, doc) in documents.iter().enumerate() {
        let stored = match embedder.embed(&settings.embedding_model, doc).await {
            Ok(embedding) => db.collection_mut(name)?.add(&i.to_string(), embedding, doc),
            Err(e) => Err(e),
        };

        match stored {
            Ok(()) => {
                info!("Added document {} to collection", i);
                report.added += 1;
            }
            Err(e) => {
                error!("Error adding document {}: {}", i, e);
                report.failures.push(IngestFailure {
                    index: i,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}
