use serde::Serialize;

use super::Coordinate;

/// Vessel positions in the order they were reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Track(Vec<Coordinate>);

impl Track {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.0
    }
}

impl FromIterator<Coordinate> for Track {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Position of the marker within its track, unique even when positions repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MarkerKey(usize);

impl MarkerKey {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn into_inner(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub key: MarkerKey,
    pub coordinate: Coordinate,
    pub label: String,
}

/// Everything needed to draw one fetched track. Always produced as a whole by
/// [`crate::project`], so the center, line and markers describe the same fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub centerpoint: Coordinate,
    pub track: Track,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum MapState {
    /// No track has been loaded yet.
    #[default]
    Uninitialized,
    Ready(ViewState),
}

impl MapState {
    pub fn view(&self) -> Option<&ViewState> {
        match self {
            MapState::Uninitialized => None,
            MapState::Ready(v) => Some(v),
        }
    }

    pub fn centerpoint(&self) -> Option<Coordinate> {
        self.view().map(|v| v.centerpoint)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, MapState::Ready(_))
    }
}

impl From<ViewState> for MapState {
    fn from(value: ViewState) -> Self {
        MapState::Ready(value)
    }
}
