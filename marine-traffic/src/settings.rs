use std::time::Duration;

use serde::Deserialize;
use strum::{AsRefStr, EnumString};

pub const DEFAULT_BASE_URL: &str = "https://services.marinetraffic.com/api";

#[derive(Debug, Clone, Deserialize)]
pub struct MarineTrafficSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: ApiKey,
    #[serde(default)]
    pub period: TrackPeriod,
    #[serde(with = "humantime_serde", default = "default_timeout")]
    pub timeout: Duration,
}

impl MarineTrafficSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: ApiKey(api_key.into()),
            period: TrackPeriod::default(),
            timeout: default_timeout(),
        }
    }
}

/// Granularity of the positions returned by the export endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrackPeriod {
    #[default]
    Daily,
    Hourly,
}

/// The API credential. It ends up in the request path, so it is never printed.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}
