use snafu::ensure;

use crate::{
    Marker, MarkerKey, ProjectionError, RawPositionRecord, Track, ViewState,
    projection_error::{EmptySnafu, NoValidPointsSnafu},
};

/// Turns raw position records into a renderable [`ViewState`].
///
/// Records whose latitude or longitude is not a finite, in-range number are left out of
/// the track. The centerpoint is the last record that has a valid coordinate.
pub fn project(records: &[RawPositionRecord]) -> Result<ViewState, ProjectionError> {
    ensure!(!records.is_empty(), EmptySnafu);

    let markers: Vec<Marker> = records
        .iter()
        .filter_map(|r| r.coordinate().map(|c| (r, c)))
        .enumerate()
        .map(|(i, (record, coordinate))| Marker {
            key: MarkerKey::new(i),
            coordinate,
            label: record.label(),
        })
        .collect();

    let Some(centerpoint) = markers.last().map(|m| m.coordinate) else {
        return NoValidPointsSnafu {
            records: records.len(),
        }
        .fail();
    };

    let track: Track = markers.iter().map(|m| m.coordinate).collect();

    Ok(ViewState {
        centerpoint,
        track,
        markers,
    })
}
