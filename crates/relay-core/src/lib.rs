//! Interop Relay core.
//!
//! Forwards aircraft telemetry and target reports to an interoperability
//! server. The crate has no RPC layer of its own; `relay-rpc` exposes
//! [`RelayService`] over JSON-RPC.
//!
//! # Example
//!
//! ```rust,ignore
//! use interop_relay::RelayService;
//!
//! #[tokio::main]
//! async fn main() -> interop_relay::Result<()> {
//!     let relay = RelayService::connect("http://10.10.130.10:80", "testuser", "testpass").await?;
//!
//!     relay.submit_telemetry(38.1478, -76.4275, 120.0, 90.0).await?;
//!     println!("Server time: {}", relay.fetch_server_info().await?);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod rate;

mod relay;

pub use client::{DynInteropClient, HttpInteropClient, InteropClient};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{InteropApi, NetworkConfig, RelayConfig};
pub use error::{RelayError, Result};
pub use models::{Color, Orientation, ServerInfo, Shape, TargetRecord, TargetType, TelemetryReport};
pub use rate::SubmissionRate;
pub use relay::{RelayService, RelayServiceBuilder};
