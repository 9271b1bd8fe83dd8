//! Server information returned by the interop server.

use serde::{Deserialize, Serialize};

/// Server metadata.
///
/// Only `server_time` is surfaced by the relay. It is kept as the exact
/// string the server sent, since its format is the server's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub message_timestamp: Option<String>,
    pub server_time: String,
}
