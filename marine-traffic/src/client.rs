use async_trait::async_trait;
use http_client::{ACCEPT, HttpClient};
use track_core::{
    FetchError, RawPositionRecord, TrackQuery, TrackSource, fetch_error::TransportSnafu,
};
use tracing::{debug, instrument};

use crate::{MarineTrafficSettings, parse_track};

// API Documentation: `https://servicedocs.marinetraffic.com/tag/Vessel-Historical-Track`
#[derive(Debug, Clone)]
pub struct MarineTrafficClient {
    client: HttpClient,
    settings: MarineTrafficSettings,
}

impl MarineTrafficClient {
    pub fn new(settings: MarineTrafficSettings) -> Result<Self, http_client::Error> {
        let client = HttpClient::builder()
            .timeout(settings.timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn track_url(&self, query: &TrackQuery) -> String {
        format!(
            "{}/exportvesseltrack/{}/v:3/period:{}/days:{}/mmsi:{}/protocol:jsono",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.api_key.as_ref(),
            self.settings.period.as_ref(),
            query.days,
            query.mmsi,
        )
    }

    // The request url carries the api key, so causes are built from the error kind
    // instead of the error's own message.
    fn transport_error(&self, error: http_client::Error) -> FetchError {
        let cause = if let Some(status) = error.status() {
            format!("server responded with status '{status}'")
        } else if error.is_timeout() {
            format!("request timed out after {:?}", self.settings.timeout)
        } else if error.is_connect() {
            "failed to connect to the track service".to_string()
        } else {
            "request could not be completed".to_string()
        };

        TransportSnafu { cause }.build()
    }
}

#[async_trait]
impl TrackSource for MarineTrafficClient {
    #[instrument(skip_all, fields(mmsi = %query.mmsi, days = query.days.get()))]
    async fn fetch(&self, query: &TrackQuery) -> Result<Vec<RawPositionRecord>, FetchError> {
        let body = self
            .client
            .get(self.track_url(query))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        let records = parse_track(&body)?;

        debug!("received {} position records", records.len());

        Ok(records)
    }
}
