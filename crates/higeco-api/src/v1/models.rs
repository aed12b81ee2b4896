// Higeco GET API response types
//
// Models for the portal's JSON payloads. Fields use `#[serde(default)]`
// liberally because the API is inconsistent about field presence across
// portal and gateway firmware versions; undocumented fields land in the
// `extra` catch-all map. Nothing here is cached or mutated locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Successful `api/v1/authenticate` response.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A monitored site/installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A piece of equipment belonging to a plant (datalogger, inverter, ...).
///
/// Device ids are short strings assigned by the gateway (e.g. `"gwc"`),
/// unlike the numeric plant/log/item ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A named data channel on a device (e.g. a sensor stream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An individual parameter within a log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `getLastValue` response for a whole log: one entry per item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastValues {
    #[serde(default)]
    pub items: Vec<LastValueItem>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Most recent sample of a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastValueItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    /// String or number depending on the item type.
    #[serde(default)]
    pub value: serde_json::Value,
    /// Sample time, seconds since the Unix epoch.
    #[serde(default)]
    pub utc: i64,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LastValueItem {
    /// Sample time as a UTC datetime; `None` if `utc` is out of range.
    pub fn utc_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.utc, 0)
    }
}
