//! The relay service: four calls in, four calls out.

use crate::client::{DynInteropClient, HttpInteropClient};
use crate::clock::{Clock, SystemClock};
use crate::config::RelayConfig;
use crate::models::{TargetRecord, TelemetryReport};
use crate::rate::SubmissionRate;
use crate::{RelayError, Result};
use serde_json::{Map, Value};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Forwards relay calls to an interop server client.
///
/// Each instance owns its own client handle, so several relays (or test
/// relays with stub clients) can live side by side.
pub struct RelayService {
    client: DynInteropClient,
    clock: Arc<dyn Clock>,
    rate: SubmissionRate,
    call_timeout: Duration,
}

impl RelayService {
    /// Log in to the interop server at `url` and build a relay around that session.
    pub async fn connect(url: &str, username: &str, password: &str) -> Result<Self> {
        Self::connect_with_timeout(url, username, password, RelayConfig::CALL_TIMEOUT).await
    }

    /// Like [`RelayService::connect`] with a custom per-call timeout.
    pub async fn connect_with_timeout(
        url: &str,
        username: &str,
        password: &str,
        call_timeout: Duration,
    ) -> Result<Self> {
        let client = with_timeout(
            call_timeout,
            HttpInteropClient::connect(url, username, password),
        )
        .await?;
        Ok(Self::builder(Arc::new(client))
            .call_timeout(call_timeout)
            .build())
    }

    /// Start building a relay around an existing client.
    pub fn builder(client: DynInteropClient) -> RelayServiceBuilder {
        RelayServiceBuilder::new(client)
    }

    /// Forward one telemetry sample.
    ///
    /// Returns `true` whenever the server accepted the upload; a rejected
    /// upload comes back as an error rather than `false`.
    pub async fn submit_telemetry(
        &self,
        latitude: f64,
        longitude: f64,
        altitude_msl: f64,
        heading: f64,
    ) -> Result<bool> {
        let report = TelemetryReport::new(latitude, longitude, altitude_msl, heading);
        with_timeout(self.call_timeout, self.client.post_telemetry(&report)).await?;

        match self.rate.record(self.clock.as_ref()).await {
            Some(hz) => debug!("Telemetry rate: {:.2} Hz", hz),
            None => debug!("Telemetry rate unavailable: no time elapsed since last submission"),
        }

        Ok(true)
    }

    /// Build a target from `fields` and forward it.
    ///
    /// Nothing is sent if the mapping does not describe a valid target.
    pub async fn submit_target(&self, fields: Map<String, Value>) -> Result<()> {
        let target = TargetRecord::from_fields(fields)?;
        let stored = with_timeout(self.call_timeout, self.client.post_target(&target)).await?;
        debug!("Target submitted, server id {:?}", stored.id);
        Ok(())
    }

    /// All targets on the server, rendered as a JSON array.
    pub async fn fetch_targets(&self) -> Result<String> {
        let targets = with_timeout(self.call_timeout, self.client.get_targets()).await?;
        Ok(serde_json::to_string(&targets)?)
    }

    /// The server's current time, exactly as the server reports it.
    pub async fn fetch_server_info(&self) -> Result<String> {
        let info = with_timeout(self.call_timeout, self.client.get_server_info()).await?;
        Ok(info.server_time)
    }

    /// Time of the most recent telemetry submission (construction time before the first).
    pub async fn last_telemetry_time(&self) -> chrono::DateTime<chrono::Utc> {
        self.rate.last_submission().await
    }

    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }
}

/// Builder for [`RelayService`].
///
/// # Example
///
/// ```rust,ignore
/// let relay = RelayService::builder(Arc::new(client))
///     .call_timeout(Duration::from_secs(5))
///     .build();
/// ```
pub struct RelayServiceBuilder {
    client: DynInteropClient,
    clock: Arc<dyn Clock>,
    call_timeout: Duration,
}

impl RelayServiceBuilder {
    pub fn new(client: DynInteropClient) -> Self {
        Self {
            client,
            clock: Arc::new(SystemClock),
            call_timeout: RelayConfig::CALL_TIMEOUT,
        }
    }

    /// Use a different time source for the telemetry rate.
    ///
    /// Default: [`SystemClock`]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Upper bound on each forwarded call.
    ///
    /// Default: [`RelayConfig::CALL_TIMEOUT`]
    pub fn call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn build(self) -> RelayService {
        let start = self.clock.now();
        RelayService {
            client: self.client,
            clock: self.clock,
            rate: SubmissionRate::new(start),
            call_timeout: self.call_timeout,
        }
    }
}

async fn with_timeout<T>(limit: Duration, fut: impl Future<Output = Result<T>>) -> Result<T> {
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| RelayError::Timeout(limit))?
}
