use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

const LABEL_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// A geographic position in decimal degrees, always finite and within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        valid.then_some(Self {
            latitude,
            longitude,
        })
    }

    pub fn parse(latitude: &str, longitude: &str) -> Option<Self> {
        let latitude = latitude.trim().parse().ok()?;
        let longitude = longitude.trim().parse().ok()?;
        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// One position report as returned by the track export endpoint. Every field is text on
/// the wire, nothing is interpreted until projection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawPositionRecord {
    #[serde(rename = "MMSI")]
    pub mmsi: String,
    #[serde(rename = "LAT")]
    pub latitude: String,
    #[serde(rename = "LON")]
    pub longitude: String,
    #[serde(rename = "TIMESTAMP")]
    pub timestamp: String,
    #[serde(rename = "SPEED", default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(rename = "COURSE", default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(rename = "HEADING", default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(rename = "STATUS", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "SHIP_ID", default, skip_serializing_if = "Option::is_none")]
    pub ship_id: Option<String>,
}

impl RawPositionRecord {
    pub fn new(
        mmsi: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            mmsi: mmsi.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            timestamp: timestamp.into(),
            speed: None,
            course: None,
            heading: None,
            status: None,
            ship_id: None,
        }
    }

    /// `None` if either component does not parse to a finite, in-range number.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::parse(&self.latitude, &self.longitude)
    }

    pub fn msgtime(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }

    /// Human readable timestamp, falls back to the raw text when it cannot be parsed.
    pub fn label(&self) -> String {
        match self.msgtime() {
            Some(t) => t.format(LABEL_FORMAT).to_string(),
            None => self.timestamp.clone(),
        }
    }
}

/// Timestamps without an offset are interpreted as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Some(t.with_timezone(&Utc));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
        .map(|t| t.and_utc())
}
