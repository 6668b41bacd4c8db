//! Errors raised while brokering calls to the FOCO API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while proxying a request to FOCO.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FocoError {
    /// Every login delivery strategy was answered with an error status
    #[error("Upstream authentication failed ({status}): {body}")]
    UpstreamAuth { status: u16, body: String },

    /// A non-login call was answered with HTTP >= 400.
    ///
    /// `body` holds the parsed JSON error where the operation attempts that,
    /// otherwise a JSON string carrying the raw response text.
    #[error("Upstream API error ({status}): {body}")]
    UpstreamApi { status: u16, body: Value },

    /// Malformed inbound request
    #[error("Invalid request: {message}")]
    ClientRequest { message: String },

    /// Connection failure or timeout talking to FOCO
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// FOCO answered 2xx with a body that could not be decoded
    #[error("Invalid upstream response: {message}")]
    InvalidResponse { message: String },
}

impl FocoError {
    /// Build an `UpstreamApi` error from raw response text.
    pub fn upstream_text(status: u16, text: impl Into<String>) -> Self {
        Self::UpstreamApi { status, body: Value::String(text.into()) }
    }

    /// Build an `UpstreamApi` error, keeping the body structured when it is JSON.
    pub fn upstream_structured(status: u16, text: &str) -> Self {
        let body = serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()));
        Self::UpstreamApi { status, body }
    }

    pub fn client_request(message: impl Into<String>) -> Self {
        Self::ClientRequest { message: message.into() }
    }

    /// Check if the error originated from an upstream HTTP status.
    pub fn is_upstream_status(&self) -> bool {
        matches!(self, Self::UpstreamAuth { .. } | Self::UpstreamApi { .. })
    }

    /// Get HTTP status code for this error.
    ///
    /// Upstream statuses are passed through unchanged.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::UpstreamAuth { status, .. } | Self::UpstreamApi { status, .. } => *status,
            Self::ClientRequest { .. } => 400,
            Self::Transport { .. } | Self::InvalidResponse { .. } => 502,
        }
    }

    /// The payload reported to callers under `detail`.
    pub fn detail(&self) -> Value {
        match self {
            Self::UpstreamAuth { body, .. } => Value::String(body.clone()),
            Self::UpstreamApi { body, .. } => body.clone(),
            Self::ClientRequest { message }
            | Self::Transport { message }
            | Self::InvalidResponse { message } => Value::String(message.clone()),
        }
    }
}
