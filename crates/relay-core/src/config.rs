//! Centralized configuration for the interop relay.
//!
//! Constants for the local RPC surface, remote-call timeouts, and the
//! interop server's API paths.

use std::time::Duration;

/// Relay-level configuration.
pub struct RelayConfig;

impl RelayConfig {
    pub const APP_NAME: &'static str = "Interop Relay";
    /// The relay listens on loopback only.
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 9001;
    /// Upper bound for any single forwarded call, login included.
    pub const CALL_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    pub const USER_AGENT: &'static str = "interop-relay/0.1";
    /// Error bodies longer than this are cut before being put in an error message.
    pub const MAX_ERROR_BODY_CHARS: usize = 512;
}

/// Interop server API paths, relative to the server base URL.
pub struct InteropApi;

impl InteropApi {
    pub const LOGIN: &'static str = "/api/login";
    pub const TELEMETRY: &'static str = "/api/telemetry";
    pub const TARGETS: &'static str = "/api/targets";
    pub const SERVER_INFO: &'static str = "/api/server_info";
}
