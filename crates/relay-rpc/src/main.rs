//! Interop Relay RPC Server.
//!
//! Logs in to an interoperability server and exposes the relay calls
//! (`telemetry`, `target_data`, `get_target_data`, `server_info`) as
//! JSON-RPC 2.0 methods on a local port.
//!
//! ```text
//! relay-rpc --url http://192.168.1.31:9000 --username testadmin --password testpass
//! ```

mod handlers;
mod server;

use anyhow::{Context, Result};
use clap::Parser;
use interop_relay::{RelayConfig, RelayService};
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "relay-rpc")]
#[command(about = "AUVSI SUAS interoperability server relay")]
struct Args {
    /// Interoperability server URL, example: http://10.10.130.10:80
    #[arg(long)]
    url: String,

    /// Interoperability username, example: calpoly-broncos
    #[arg(long)]
    username: String,

    /// Interoperability password, example: 4597630144
    #[arg(long)]
    password: String,

    /// Host to bind to
    #[arg(long, default_value = RelayConfig::DEFAULT_HOST)]
    host: String,

    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value_t = RelayConfig::DEFAULT_PORT)]
    port: u16,

    /// Timeout for each call forwarded to the interop server, in seconds
    #[arg(long, default_value_t = RelayConfig::CALL_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Starting {}", RelayConfig::APP_NAME);

    let relay = RelayService::connect_with_timeout(
        &args.url,
        &args.username,
        &args.password,
        Duration::from_secs(args.timeout_secs),
    )
    .await
    .with_context(|| format!("failed to connect to interop server at {}", args.url))?;

    let addr = server::start_server(relay, &args.host, args.port).await?;

    // Supervising processes read the bound port from stdout; logs go to stderr
    println!("RPC_PORT={}", addr.port());

    info!("Relay running on {}, use Control-C to exit", addr);

    tokio::signal::ctrl_c().await?;
    info!("Exiting");

    Ok(())
}
