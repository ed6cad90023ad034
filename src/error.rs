// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Markers in a failure's text that mean the upstream rejected our credentials.
const AUTH_MARKERS: [&str; 2] = ["invalid_api_key", "401"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to chat-completion service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error code: {code} - {body}", code = .status.as_u16())]
    Api { status: StatusCode, body: String },

    #[error("chat-completion service returned no content")]
    EmptyReply,

    #[error("{0}")]
    Other(String),
}

impl CompletionError {
    /// True when the failure looks like a rejected or missing API key.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            // Transport errors carry the request url, so only trust the status.
            CompletionError::Http(e) => e.status() == Some(StatusCode::UNAUTHORIZED),
            CompletionError::Api { status, .. } if *status == StatusCode::UNAUTHORIZED => true,
            _ => {
                let text = self.to_string();
                AUTH_MARKERS.iter().any(|m| text.contains(m))
            }
        }
    }
}
