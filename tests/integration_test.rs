//! Integration tests against a live Ollama server.
//!
//! Ignored by default; run with `--ignored` after pulling
//! `nomic-embed-text` and `gemma3`.

use ollamarag::ollama::OllamaClient;
use ollamarag::rag::query::ERROR_PREFIX;
use ollamarag::rag::{query_and_respond, setup_collection, RagSettings, DOCUMENTS};
use ollamarag::vector_db::VectorDb;

#[test]
fn test_component_initialization() {
    let client = OllamaClient::new();
    assert!(client.is_ok());
    assert_eq!(RagSettings::default().collection, "docs");
}

#[tokio::test]
#[ignore] // Requires Ollama running
async fn test_full_run_against_ollama() {
    let client = OllamaClient::new().unwrap();
    let settings = RagSettings::default();
    let mut db = VectorDb::new();

    let report = setup_collection(&mut db, &client, &settings, &DOCUMENTS)
        .await
        .unwrap();
    let collection = db.collection(&settings.collection).unwrap();
    assert_eq!(collection.count(), 6 - report.failures.len());

    let reply = query_and_respond(
        collection,
        &client,
        &client,
        &settings,
        "What animals are llamas related to?",
    )
    .await;

    assert!(!reply.is_empty());
    assert!(!reply.starts_with(ERROR_PREFIX));
}

#[tokio::test]
#[ignore] // Requires Ollama running
async fn test_unknown_chat_model_yields_error_string() {
    let client = OllamaClient::new().unwrap();
    let mut settings = RagSettings::default();
    let mut db = VectorDb::new();
    setup_collection(&mut db, &client, &settings, &DOCUMENTS)
        .await
        .unwrap();

    settings.chat_model = "no-such-model:999".to_string();
    let reply = query_and_respond(
        db.collection(&settings.collection).unwrap(),
        &client,
        &client,
        &settings,
        "What do llamas eat?",
    )
    .await;

    assert!(reply.starts_with(ERROR_PREFIX));
}
