//! Typed platform configuration
//!
//! Decodes the `{ interval, tvs: [...] }` platform section the host passes in.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};

/// Default Bravia REST API port
pub const DEFAULT_PORT: u16 = 80;

/// Default poll interval when none (or zero) is configured
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;

/// A single configured television
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvConfig {
    /// Display name, unique key across the tv list
    pub name: String,

    /// IP address of the tv, required for serial derivation and device control
    pub ip: String,

    /// MAC address, needed for Wake-on-LAN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,

    /// REST API port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Pre-shared key for the tv's REST API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,

    /// Expose non-favourite inputs as sources
    #[serde(default)]
    pub extra_inputs: bool,

    /// Expose HDMI-CEC devices as sources
    #[serde(default)]
    pub cec_inputs: bool,

    /// Expose the channel tuner as a source
    #[serde(default)]
    pub channel_source: bool,

    /// Channel numbers to expose as sources
    #[serde(default)]
    pub channels: Vec<u32>,

    /// App titles to expose as sources
    #[serde(default)]
    pub apps: Vec<String>,

    /// Power on over Wake-on-LAN instead of the REST API
    #[serde(default)]
    pub wol: bool,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// The `platform` section consumed by the bridge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Poll interval in seconds; zero or absent falls back to the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,

    /// Configured televisions; anything but a list is treated as empty
    #[serde(default, deserialize_with = "tvs_or_empty")]
    pub tvs: Vec<TvConfig>,
}

/// Accepts a missing, `null` or non-list `tvs` value as an empty list while
/// still rejecting malformed entries inside an actual list.
fn tvs_or_empty<'de, D>(deserializer: D) -> Result<Vec<TvConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(_) => serde_json::from_value(value).map_err(serde::de::Error::custom),
        Value::Null => Ok(Vec::new()),
        other => {
            warn!("'tvs' is not a list ({}), ignoring", type_name(&other));
            Ok(Vec::new())
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

impl PlatformConfig {
    /// Decode the platform section from the host's JSON value
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|source| ConfigError::Decode { source })
    }

    /// Poll interval in milliseconds
    ///
    /// A configured nonzero seconds value is scaled to milliseconds; zero or
    /// absent yields [`DEFAULT_POLL_INTERVAL_MS`].
    pub fn poll_interval_ms(&self) -> u64 {
        match self.interval {
            Some(seconds) if seconds > 0 => seconds * 1000,
            _ => DEFAULT_POLL_INTERVAL_MS,
        }
    }
}
