//! Relay handlers: telemetry, targets, and server info.

use super::shared::{check_positional_count, require_f64_param, require_target_fields};
use crate::server::AppState;
use interop_relay::Result;
use serde_json::Value;

pub async fn telemetry(state: &AppState, params: &Value) -> Result<Value> {
    check_positional_count(params, 4)?;
    let latitude = require_f64_param(params, 0, &["lat", "latitude"])?;
    let longitude = require_f64_param(params, 1, &["lon", "longitude"])?;
    let altitude_msl = require_f64_param(params, 2, &["alt", "altitude_msl", "altitudeMsl"])?;
    let heading = require_f64_param(params, 3, &["heading", "uas_heading", "uasHeading"])?;

    let accepted = state
        .relay
        .submit_telemetry(latitude, longitude, altitude_msl, heading)
        .await?;
    Ok(Value::Bool(accepted))
}

pub async fn target_data(state: &AppState, params: &Value) -> Result<Value> {
    check_positional_count(params, 1)?;
    let fields = require_target_fields(params)?;
    state.relay.submit_target(fields).await?;
    Ok(Value::Null)
}

pub async fn get_target_data(state: &AppState, params: &Value) -> Result<Value> {
    check_positional_count(params, 0)?;
    let rendered = state.relay.fetch_targets().await?;
    Ok(Value::String(rendered))
}

pub async fn server_info(state: &AppState, params: &Value) -> Result<Value> {
    check_positional_count(params, 0)?;
    let server_time = state.relay.fetch_server_info().await?;
    Ok(Value::String(server_time))
}
