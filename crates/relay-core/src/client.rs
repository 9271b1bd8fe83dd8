//! Interop server client.
//!
//! [`InteropClient`] is the seam between the relay and the remote service.
//! [`HttpInteropClient`] implements it over the interop server's HTTP API:
//! - Session login with username/password, kept in a cookie store
//! - Form-encoded telemetry uploads
//! - JSON target uploads and listing
//! - Server info
//!
//! There are no retries or backoff: failures go straight back to the caller.

use crate::config::{InteropApi, NetworkConfig};
use crate::models::{ServerInfo, TargetRecord, TelemetryReport};
use crate::{RelayError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Operations the relay needs from the interop server.
#[async_trait]
pub trait InteropClient: Send + Sync {
    /// Upload one telemetry sample.
    async fn post_telemetry(&self, report: &TelemetryReport) -> Result<()>;

    /// Upload a target and return the record as stored by the server.
    async fn post_target(&self, target: &TargetRecord) -> Result<TargetRecord>;

    /// List all targets the server holds for this user.
    async fn get_targets(&self) -> Result<Vec<TargetRecord>>;

    /// Fetch server metadata.
    async fn get_server_info(&self) -> Result<ServerInfo>;
}

/// Shared handle to any client implementation.
pub type DynInteropClient = Arc<dyn InteropClient>;

/// HTTP client for the interop server.
pub struct HttpInteropClient {
    client: Client,
    base_url: String,
}

impl HttpInteropClient {
    /// Build a client and log in.
    ///
    /// Fails on a malformed URL, a rejected login, or an unreachable server.
    pub async fn connect(url: &str, username: &str, password: &str) -> Result<Self> {
        let client = Self::new(url)?;
        client.login(username, password).await?;
        Ok(client)
    }

    /// Build a client without logging in.
    pub fn new(url: &str) -> Result<Self> {
        let base_url = parse_base_url(url)?;

        let client = Client::builder()
            .timeout(NetworkConfig::REQUEST_TIMEOUT)
            .connect_timeout(NetworkConfig::CONNECT_TIMEOUT)
            .user_agent(NetworkConfig::USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(|e| RelayError::Config {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, base_url })
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a session. The session cookie is reused by every later call.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let url = self.endpoint(InteropApi::LOGIN);
        let response = self
            .client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| network_error("POST", &url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Authentication {
                message: format!("login as {} rejected ({}): {}", username, status, truncate_body(&body)),
            });
        }

        info!("Logged in to interop server {} as {}", self.base_url, username);
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_response_status(response: Response, url: &str) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RelayError::Authentication {
                message: format!("{} returned {}: {}", url, status, truncate_body(&body)),
            });
        }

        Err(RelayError::RemoteStatus {
            status: status.as_u16(),
            message: truncate_body(&body),
        })
    }
}

#[async_trait]
impl InteropClient for HttpInteropClient {
    async fn post_telemetry(&self, report: &TelemetryReport) -> Result<()> {
        let url = self.endpoint(InteropApi::TELEMETRY);
        let response = self
            .client
            .post(&url)
            .form(report)
            .send()
            .await
            .map_err(|e| network_error("POST", &url, e))?;

        Self::check_response_status(response, &url).await?;
        Ok(())
    }

    async fn post_target(&self, target: &TargetRecord) -> Result<TargetRecord> {
        let url = self.endpoint(InteropApi::TARGETS);
        let response = self
            .client
            .post(&url)
            .json(target)
            .send()
            .await
            .map_err(|e| network_error("POST", &url, e))?;

        let response = Self::check_response_status(response, &url).await?;
        let stored: TargetRecord = response.json().await?;
        debug!("Interop server stored target {:?}", stored.id);
        Ok(stored)
    }

    async fn get_targets(&self) -> Result<Vec<TargetRecord>> {
        let url = self.endpoint(InteropApi::TARGETS);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error("GET", &url, e))?;

        let response = Self::check_response_status(response, &url).await?;
        Ok(response.json().await?)
    }

    async fn get_server_info(&self) -> Result<ServerInfo> {
        let url = self.endpoint(InteropApi::SERVER_INFO);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error("GET", &url, e))?;

        let response = Self::check_response_status(response, &url).await?;
        Ok(response.json().await?)
    }
}

/// Validate the server URL and strip any trailing slash.
pub fn parse_base_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| RelayError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(RelayError::InvalidUrl {
            url: url.to_string(),
            message: format!("unsupported scheme {}", parsed.scheme()),
        });
    }

    if parsed.host_str().is_none() {
        return Err(RelayError::InvalidUrl {
            url: url.to_string(),
            message: "missing host".to_string(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn network_error(method: &str, url: &str, err: reqwest::Error) -> RelayError {
    if err.is_timeout() {
        return RelayError::Timeout(NetworkConfig::REQUEST_TIMEOUT);
    }
    RelayError::Network {
        message: format!("{} {} failed: {}", method, url, err),
        source: Some(err),
    }
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= NetworkConfig::MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let mut cut: String = body.chars().take(NetworkConfig::MAX_ERROR_BODY_CHARS).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url() {
        assert_eq!(
            parse_base_url("http://10.10.130.10:80").unwrap(),
            "http://10.10.130.10"
        );
        assert_eq!(
            parse_base_url("http://192.168.1.31:9000/").unwrap(),
            "http://192.168.1.31:9000"
        );
        assert_eq!(
            parse_base_url("https://interop.example.com/base/").unwrap(),
            "https://interop.example.com/base"
        );
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(RelayError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(RelayError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("  short  "), "short");
        let long = "x".repeat(NetworkConfig::MAX_ERROR_BODY_CHARS + 10);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.len(), NetworkConfig::MAX_ERROR_BODY_CHARS + 3);
    }

    #[test]
    fn test_client_creation() {
        let client = HttpInteropClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(
            client.endpoint(InteropApi::LOGIN),
            "http://127.0.0.1:8000/api/login"
        );
    }

    #[tokio::test]
    async fn test_connect_to_closed_port_is_network_error() {
        // Port 9 (discard) is closed on loopback in test environments
        let result = HttpInteropClient::connect("http://127.0.0.1:9", "user", "pass").await;
        assert!(matches!(
            result,
            Err(RelayError::Network { .. }) | Err(RelayError::Timeout(_))
        ));
    }
}
