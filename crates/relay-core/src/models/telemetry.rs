//! Aircraft telemetry sample.

use serde::{Deserialize, Serialize};

/// One aircraft position/heading sample.
///
/// Serialized as the interop server's telemetry form, where the heading
/// field is called `uas_heading`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryReport {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Altitude above mean sea level, in feet.
    pub altitude_msl: f64,
    /// Heading in degrees, 0 is true north.
    #[serde(rename = "uas_heading")]
    pub heading: f64,
}

impl TelemetryReport {
    pub fn new(latitude: f64, longitude: f64, altitude_msl: f64, heading: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude_msl,
            heading,
        }
    }
}
