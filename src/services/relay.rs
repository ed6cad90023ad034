// src/services/relay.rs
use axum::http::StatusCode;
use tracing::{error, info};

use crate::error::CompletionError;
use crate::message::{ApiStatus, ChatMessage};
use crate::services::completion::ChatCompletion;

pub const EMPTY_MESSAGE_WARNING: &str = "⚠️ Please provide a message.";
pub const GENERIC_FAILURE: &str = "Sorry, something went wrong while contacting the AI service.";
pub const NOT_CONFIGURED: &str = "Service not configured. Please check the API key on the server.";
pub const TEST_PROMPT: &str = "Say 'API is working!'";

/// User-facing text for a failed upstream call.
pub fn failure_message(err: &CompletionError) -> &'static str {
    if err.is_auth_failure() {
        NOT_CONFIGURED
    } else {
        GENERIC_FAILURE
    }
}

/// Forward one user message and map the outcome to a status and reply text.
/// Blank input never reaches the client.
pub async fn relay(client: &dyn ChatCompletion, user_msg: &str) -> (StatusCode, String) {
    let trimmed = user_msg.trim();
    if trimmed.is_empty() {
        info!("empty message, skipping upstream call");
        return (StatusCode::OK, EMPTY_MESSAGE_WARNING.to_string());
    }

    match client.complete(vec![ChatMessage::user(trimmed)]).await {
        Ok(reply) => (StatusCode::OK, reply),
        Err(err) => {
            error!(error = %err, auth = err.is_auth_failure(), "chat completion failed");
            (StatusCode::INTERNAL_SERVER_ERROR, failure_message(&err).to_string())
        }
    }
}

/// Smoke test the upstream with a fixed prompt.
pub async fn probe(client: &dyn ChatCompletion) -> (StatusCode, ApiStatus) {
    match client.complete(vec![ChatMessage::user(TEST_PROMPT)]).await {
        Ok(response) => (StatusCode::OK, ApiStatus::Success { response }),
        Err(err) => {
            error!(error = %err, "api probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiStatus::Error {
                    message: err.to_string(),
                },
            )
        }
    }
}
