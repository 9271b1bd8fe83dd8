//! Error types for the interop relay.
//!
//! Errors fall into three groups: startup/construction failures (bad URL,
//! rejected login), per-request field-mapping failures, and per-request
//! remote-call failures. Only the first group is fatal to the process; the
//! RPC layer turns everything else into a JSON-RPC error object.

use crate::config::NetworkConfig;
use thiserror::Error;

/// Main error type for the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    // Construction errors
    #[error("Invalid interop server URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // Field-mapping errors
    #[error("Unknown target field: {field}")]
    UnknownField { field: String },

    #[error("Missing required target field: {field}")]
    MissingField { field: String },

    #[error("Invalid target field: {message}")]
    InvalidField { message: String },

    // RPC request errors
    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    #[error("Method not found: {method}")]
    MethodNotFound { method: String },

    // Remote-call errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Interop server returned {status}: {message}")]
    RemoteStatus { status: u16, message: String },

    #[error("Malformed response from interop server: {message}")]
    MalformedResponse { message: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout(NetworkConfig::REQUEST_TIMEOUT)
        } else if err.is_decode() {
            RelayError::MalformedResponse {
                message: err.to_string(),
            }
        } else {
            RelayError::Network {
                message: err.to_string(),
                source: Some(err),
            }
        }
    }
}

impl RelayError {
    /// Convert to a JSON-RPC error code.
    ///
    /// Standard JSON-RPC error codes:
    /// - -32601: Method not found
    /// - -32602: Invalid params
    /// - -32603: Internal error
    ///
    /// Custom error codes (application-defined, -32000 to -32099):
    /// - -32000: Remote call failed (network, timeout, bad status, bad body)
    /// - -32001: Authentication rejected
    /// - -32005: Target field mapping failed
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            RelayError::Network { .. }
            | RelayError::Timeout(_)
            | RelayError::RemoteStatus { .. }
            | RelayError::MalformedResponse { .. } => -32000,

            RelayError::Authentication { .. } => -32001,

            RelayError::UnknownField { .. }
            | RelayError::MissingField { .. }
            | RelayError::InvalidField { .. } => -32005,

            RelayError::InvalidParams { .. } => -32602,

            RelayError::MethodNotFound { .. } => -32601,

            RelayError::InvalidUrl { .. } | RelayError::Config { .. } | RelayError::Json { .. } => {
                -32603
            }
        }
    }

    /// Whether this error came from turning a caller mapping into a target record.
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            RelayError::UnknownField { .. }
                | RelayError::MissingField { .. }
                | RelayError::InvalidField { .. }
        )
    }

    /// Whether this error came from talking to the interop server.
    pub fn is_remote_error(&self) -> bool {
        matches!(
            self,
            RelayError::Network { .. }
                | RelayError::Timeout(_)
                | RelayError::RemoteStatus { .. }
                | RelayError::MalformedResponse { .. }
                | RelayError::Authentication { .. }
        )
    }
}
