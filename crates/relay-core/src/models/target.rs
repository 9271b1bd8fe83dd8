//! Target (object of interest) records.

use crate::error::{RelayError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Standard,
    Qrc,
    OffAxis,
    Emergent,
}

/// Compass orientation of the target's alphanumeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[serde(alias = "N")]
    N,
    #[serde(alias = "NE")]
    Ne,
    #[serde(alias = "E")]
    E,
    #[serde(alias = "SE")]
    Se,
    #[serde(alias = "S")]
    S,
    #[serde(alias = "SW")]
    Sw,
    #[serde(alias = "W")]
    W,
    #[serde(alias = "NW")]
    Nw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Circle,
    Semicircle,
    QuarterCircle,
    Triangle,
    Square,
    Rectangle,
    Trapezoid,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Star,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
    Gray,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Brown,
    Orange,
}

/// A detected target as the interop server models it.
///
/// `id` and `user` are assigned by the server; callers may pass them but
/// normally leave them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<i64>,
    #[serde(rename = "type")]
    pub target_type: TargetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphanumeric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphanumeric_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub autonomous: bool,
}

impl TargetRecord {
    /// Every field name a caller mapping may contain.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "user",
        "type",
        "latitude",
        "longitude",
        "orientation",
        "shape",
        "background_color",
        "alphanumeric",
        "alphanumeric_color",
        "description",
        "autonomous",
    ];

    /// Fields that must be present in a caller mapping.
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["type"];

    /// Create a record with only the target type set.
    pub fn new(target_type: TargetType) -> Self {
        Self {
            id: None,
            user: None,
            target_type,
            latitude: None,
            longitude: None,
            orientation: None,
            shape: None,
            background_color: None,
            alphanumeric: None,
            alphanumeric_color: None,
            description: None,
            autonomous: false,
        }
    }

    /// Build a record from a caller-supplied field mapping.
    ///
    /// Keys are checked against [`TargetRecord::FIELDS`] before any value is
    /// looked at, so an unknown key is always reported as such even when
    /// other values are also wrong. Orientation is matched case-insensitively.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self> {
        if let Some(field) = fields
            .keys()
            .find(|key| !Self::FIELDS.contains(&key.as_str()))
        {
            return Err(RelayError::UnknownField {
                field: field.clone(),
            });
        }

        if let Some(field) = Self::REQUIRED_FIELDS
            .iter()
            .find(|name| !fields.contains_key(**name))
        {
            return Err(RelayError::MissingField {
                field: (*field).to_string(),
            });
        }

        if let Some(Value::String(orientation)) = fields.get_mut("orientation") {
            *orientation = orientation.to_lowercase();
        }

        serde_json::from_value(Value::Object(fields)).map_err(|e| RelayError::InvalidField {
            message: e.to_string(),
        })
    }
}
