use async_trait::async_trait;

use crate::{FetchError, RawPositionRecord, TrackQuery};

/// A provider of historical vessel tracks.
///
/// Every call is independent: implementations issue exactly one request per call and
/// keep no state between calls.
#[async_trait]
pub trait TrackSource: Send + Sync {
    async fn fetch(&self, query: &TrackQuery) -> Result<Vec<RawPositionRecord>, FetchError>;
}
