//! Client error types
//!
//! Every rejected backend call maps onto one of these variants. The UI
//! collapses them into generic banners; the detail is only logged. A
//! `NotFound` is deliberately usable as a control-flow signal ("does a
//! like exist") rather than a failure.

use thiserror::Error;

/// Errors produced by the PocketBase client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, TLS, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the request with a non-2xx status
    #[error("request failed with status {status}: {message}")]
    Api {
        status: u16,
        message: String,
        /// Field-level validation details as returned by the server
        data: serde_json::Value,
    },

    /// The requested record does not exist
    #[error("record not found")]
    NotFound,

    /// The response body could not be decoded
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// An authenticated call was attempted without a session
    #[error("not authenticated")]
    NotAuthenticated,

    /// Local I/O failure (runtime creation, reading an image file)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// True when the error means "the record is absent".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound)
            || matches!(self, ClientError::Api { status: 404, .. })
    }

    /// Extract the server's per-field validation message, if any.
    ///
    /// PocketBase nests these as `data.{field}.message` in the error body.
    pub fn field_message(&self, field: &str) -> Option<String> {
        match self {
            ClientError::Api { data, .. } => data
                .get(field)
                .and_then(|f| f.get("message"))
                .and_then(|m| m.as_str())
                .map(|m| m.to_string()),
            _ => None,
        }
    }
}
