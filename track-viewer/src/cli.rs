use std::{num::NonZeroU32, path::PathBuf};

use clap::Parser;
use marine_traffic::TrackPeriod;
use track_core::{Mmsi, MmsiError, QueryError, TrackQuery, parse_days};

/// Fetch the historical track of a vessel and render it as a GeoJSON map.
#[derive(Debug, Parser)]
#[command(name = "track-viewer", version)]
pub struct Cli {
    /// Maritime Mobile Service Identity of the vessel, nine digits
    #[arg(long, value_parser = parse_mmsi)]
    pub mmsi: Mmsi,

    /// Number of days of history to fetch
    #[arg(long, value_parser = parse_day_count)]
    pub days: NonZeroU32,

    /// Position granularity, overrides the configured period
    #[arg(long)]
    pub period: Option<TrackPeriod>,

    /// Write the map to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn query(&self) -> TrackQuery {
        TrackQuery::new(self.mmsi.clone(), self.days)
    }
}

fn parse_mmsi(value: &str) -> Result<Mmsi, MmsiError> {
    value.parse()
}

fn parse_day_count(value: &str) -> Result<NonZeroU32, QueryError> {
    parse_days(value)
}
