//! GeoJSON rendering of the map state.
//!
//! Marker and line styling uses the simplestyle property names understood by most GeoJSON
//! viewers. Positions are written in GeoJSON order, longitude first.

use serde::Serialize;
use serde_json::{Map, Value};
use track_core::{Coordinate, MapState, ViewState};

use crate::settings::MapSettings;

const MARKER_SYMBOL: &str = "ferry";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDocument {
    #[serde(rename = "type")]
    kind: &'static str,
    /// Where the map should be centered, `[longitude, latitude]`.
    pub center: [f64; 2],
    pub zoom: u8,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point([f64; 2]),
    LineString(Vec<[f64; 2]>),
}

pub fn render(state: &MapState, settings: &MapSettings) -> MapDocument {
    match state {
        MapState::Uninitialized => {
            let center = settings.default_center;
            MapDocument::new([center.longitude, center.latitude], settings.zoom, vec![])
        }
        MapState::Ready(view) => MapDocument::new(
            position(&view.centerpoint),
            settings.zoom,
            features(view, settings),
        ),
    }
}

impl MapDocument {
    fn new(center: [f64; 2], zoom: u8, features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection",
            center,
            zoom,
            features,
        }
    }
}

impl Feature {
    fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties,
        }
    }
}

fn features(view: &ViewState, settings: &MapSettings) -> Vec<Feature> {
    let mut features: Vec<Feature> = view
        .markers
        .iter()
        .map(|m| {
            Feature::new(
                Geometry::Point(position(&m.coordinate)),
                properties([
                    ("key", m.key.into_inner().into()),
                    ("title", m.label.clone().into()),
                    ("marker-symbol", MARKER_SYMBOL.into()),
                ]),
            )
        })
        .collect();

    // A LineString needs at least two positions.
    if view.track.len() > 1 {
        let style = &settings.polyline;
        features.push(Feature::new(
            Geometry::LineString(view.track.iter().map(position).collect()),
            properties([
                ("stroke", style.stroke_color.clone().into()),
                ("stroke-opacity", style.stroke_opacity.into()),
                ("stroke-width", style.stroke_weight.into()),
                ("z-index", style.z_index.into()),
            ]),
        ));
    }

    features
}

fn properties<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn position(coordinate: &Coordinate) -> [f64; 2] {
    [coordinate.longitude(), coordinate.latitude()]
}
