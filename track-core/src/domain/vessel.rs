use std::{fmt::Display, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};

use crate::error::{
    MmsiError, QueryError,
    mmsi_error::{EmptySnafu, ShapeSnafu},
    query_error::{InvalidDaysSnafu, MissingDaysSnafu, MmsiSnafu},
};

const MMSI_LENGTH: usize = 9;

/// Maritime Mobile Service Identity. Kept as text so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mmsi(String);

impl Mmsi {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Mmsi {
    type Err = MmsiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ensure!(!s.is_empty(), EmptySnafu);
        ensure!(
            s.len() == MMSI_LENGTH && s.bytes().all(|b| b.is_ascii_digit()),
            ShapeSnafu { value: s }
        );
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Mmsi {
    type Error = MmsiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mmsi> for String {
    fn from(value: Mmsi) -> Self {
        value.0
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A request for the track of one vessel over the last `days` days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackQuery {
    pub mmsi: Mmsi,
    pub days: NonZeroU32,
}

impl TrackQuery {
    pub fn new(mmsi: Mmsi, days: NonZeroU32) -> Self {
        Self { mmsi, days }
    }

    /// Builds a query from raw form input, both fields are required.
    pub fn parse(mmsi: &str, days: &str) -> Result<Self, QueryError> {
        let mmsi = mmsi.parse().context(MmsiSnafu)?;
        let days = parse_days(days)?;
        Ok(Self { mmsi, days })
    }
}

pub fn parse_days(value: &str) -> Result<NonZeroU32, QueryError> {
    let value = value.trim();
    ensure!(!value.is_empty(), MissingDaysSnafu);
    value
        .parse::<NonZeroU32>()
        .ok()
        .ok_or_else(|| InvalidDaysSnafu { value }.build())
}
