#![deny(rust_2018_idioms)]

//! Client for the MarineTraffic vessel track export API.

mod client;
mod models;
mod settings;

pub use client::MarineTrafficClient;
pub use models::parse_track;
pub use settings::{ApiKey, MarineTrafficSettings, TrackPeriod};
