use std::path::Path;

use config::{Config, ConfigError, File, Map};
use marine_traffic::MarineTrafficSettings;
use serde::Deserialize;
use strum::{AsRefStr, EnumString};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log_level: LogLevel,
    pub environment: Environment,
    pub marine_traffic: MarineTrafficSettings,
    #[serde(default)]
    pub map: MapSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    Local,
    Test,
    Production,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub default_center: CenterSettings,
    pub zoom: u8,
    pub polyline: PolylineStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CenterSettings {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolylineStyle {
    pub stroke_color: String,
    pub stroke_opacity: f64,
    pub stroke_weight: u32,
    pub z_index: i32,
}

impl Settings {
    /// Reads `APP_ENVIRONMENT` to pick the configuration files, defaults to `local`.
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENVIRONMENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Environment::Local);

        Self::load(environment)
    }

    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"), environment, None)
    }

    /// Layers `{dir}/{environment}.yaml`, the optional `{dir}/{environment}.secret.yaml` and
    /// `TRACK_VIEWER__*` variables, later sources win. `vars` replaces the process
    /// environment when given.
    pub fn load_from(
        dir: &Path,
        environment: Environment,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let environment = environment.as_ref();
        let base = dir.join(environment);
        let secret = dir.join(format!("{environment}.secret"));

        Config::builder()
            .add_source(File::from(base).required(true))
            .add_source(File::from(secret).required(false))
            .add_source(
                config::Environment::with_prefix("TRACK_VIEWER")
                    .separator("__")
                    .source(vars),
            )
            .set_override("environment", environment)?
            .build()?
            .try_deserialize()
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center: CenterSettings {
                latitude: 37.98381,
                longitude: 23.727539,
            },
            zoom: 10,
            polyline: PolylineStyle::default(),
        }
    }
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            stroke_color: "#FF0000".to_string(),
            stroke_opacity: 0.8,
            stroke_weight: 2,
            z_index: 1,
        }
    }
}
