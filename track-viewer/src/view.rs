use snafu::ResultExt;
use track_core::{MapState, TrackQuery, TrackSource, ViewState, project};
use tracing::{debug, instrument, warn};

use crate::error::{
    Result,
    error::{FetchSnafu, ProjectionSnafu},
};

/// Identifies one submission so its response can be matched against the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Submission(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Applied,
    /// A newer submission was started before this one completed, its outcome was dropped.
    Stale,
}

/// Owns the map state shown to the user.
///
/// The state only ever changes by being replaced with a complete [`ViewState`]; a failed
/// submission leaves whatever was shown before untouched.
#[derive(Debug, Default)]
pub struct MapView {
    state: MapState,
    latest: Option<Submission>,
    issued: u64,
}

impl MapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    pub fn begin(&mut self) -> Submission {
        self.issued += 1;
        let submission = Submission(self.issued);
        self.latest = Some(submission);
        submission
    }

    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<ViewState>,
    ) -> Result<Update> {
        if self.latest != Some(submission) {
            debug!("dropping outcome of stale submission {submission:?}");
            return Ok(Update::Stale);
        }

        self.state = MapState::Ready(outcome?);
        Ok(Update::Applied)
    }
}

/// Fetches the track for `query` and projects it, nothing is projected if the fetch fails.
#[instrument(skip(source))]
pub async fn load_track<S>(source: &S, query: &TrackQuery) -> Result<ViewState>
where
    S: TrackSource + ?Sized,
{
    let records = source.fetch(query).await.context(FetchSnafu)?;
    let view = project(&records).context(ProjectionSnafu)?;

    let skipped = records.len() - view.track.len();
    if skipped > 0 {
        warn!("skipped {skipped} position records without a valid coordinate");
    }

    Ok(view)
}
