//! Data models exchanged with the interop server.
//!
//! All of these are plain values: they are built for a single call, sent,
//! and dropped. Field names follow the interop server's JSON and form
//! encodings.

mod server_info;
mod target;
mod telemetry;

pub use server_info::*;
pub use target::*;
pub use telemetry::*;
