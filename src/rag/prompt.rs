// Prompt assembly for context-grounded answers
use crate::ollama::ChatMessage;

/// System prompt sent with every question
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that answers questions based on the provided context. If the context doesn't contain enough information to answer the question, say so.";

/// Join retrieved documents into one context block, one per line
pub fn build_context<S: AsRef<str>>(documents: &[S]) -> String {
    documents
        .iter()
        .map(|d| d.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}

/// User turn carrying the context and the question
pub fn user_prompt(context: &str, query: &str) -> String {
    format!(
        "Context information:\n{}\n\nQuestion: {}\n\nPlease answer the question based only on the context provided.",
        context, query
    )
}

/// System + user messages for one chat completion
pub fn build_messages(context: &str, query: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(context, query)),
    ]
}
