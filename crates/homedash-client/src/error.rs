//! Client error types.

use thiserror::Error;

/// Why a request to the dashboard API failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response (connection refused, reset, DNS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with an error status and said why.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The server answered with an error status and no readable body.
    #[error("Request failed with status {status}")]
    Unknown { status: u16 },

    /// A success response whose body was not the expected envelope.
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Human-readable message carried by error actions.
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Unknown { status } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Build an error from a non-2xx response body.
    ///
    /// Prefers the `error` field of a JSON body, falls back to the raw text,
    /// and reports [`ClientError::Unknown`] when there is nothing to show.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            return Self::Unknown { status };
        }

        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.to_string());

        Self::Api { status, message }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
