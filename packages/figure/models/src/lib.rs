#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Figure document types.
//!
//! A [`Figure`] serializes to the `{ data, layout }` JSON document that
//! Plotly.js renders directly. Only the trace kinds and layout attributes
//! the accident map uses are modelled; key names follow Plotly's schema
//! rather than Rust conventions.

use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Traces, drawn in order.
    pub data: Vec<Trace>,
    /// Axes, title, map view and margins.
    pub layout: Layout,
}

/// A single Plotly trace, tagged by its `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Vertical bar chart.
    Bar(BarTrace),
    /// Filled polygons over a Mapbox base map.
    Choroplethmapbox(ChoroplethMapboxTrace),
}

/// Bar trace: one bar per `x` category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarTrace {
    /// Category axis values.
    pub x: Vec<String>,
    /// Bar heights, parallel to `x`.
    pub y: Vec<u64>,
    /// `"v"` for vertical bars.
    pub orientation: String,
    /// Hover label template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl BarTrace {
    /// Number of bars drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trace draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Choropleth trace: each location is a `GeoJSON` feature filled by `z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethMapboxTrace {
    /// Polygons referenced by `locations`.
    pub geojson: FeatureCollection,
    /// Feature key matched against `locations` (e.g. `"id"`).
    pub featureidkey: String,
    /// Feature ids to fill.
    pub locations: Vec<String>,
    /// Color values, parallel to `locations`.
    pub z: Vec<f64>,
    /// `(position, color)` stops.
    pub colorscale: Vec<(f64, String)>,
    /// Whether to draw a color bar.
    pub showscale: bool,
    /// Legend entry name.
    pub name: String,
    /// Legend group.
    pub legendgroup: String,
    /// Whether the trace appears in the legend.
    pub showlegend: bool,
    /// Fill styling.
    pub marker: ChoroplethMarker,
    /// Hover text, parallel to `locations`.
    pub hovertext: Vec<String>,
    /// Hover label template.
    pub hovertemplate: String,
}

/// Fill styling for choropleth polygons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethMarker {
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Figure-level layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Chart title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    /// Horizontal axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Vertical axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    /// Base map view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<Mapbox>,
    /// Outer margins in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    /// Legend settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

/// A text title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Title text.
    pub text: String,
}

impl Title {
    /// Creates a title.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Axis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis title.
    pub title: Title,
    /// Axis scale. Plotly infers it from the data when unset.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
}

/// Plotly axis scale types used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Discrete labels, never parsed as numbers.
    Category,
}

/// Mapbox base-map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapbox {
    /// Base-map style name (e.g. `"carto-positron"`).
    pub style: String,
    /// Initial zoom level.
    pub zoom: f64,
    /// Initial view center.
    pub center: LatLon,
}

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Outer margins in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    /// Right.
    pub r: u32,
    /// Top.
    pub t: u32,
    /// Left.
    pub l: u32,
    /// Bottom.
    pub b: u32,
}

/// Legend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    /// Legend heading.
    pub title: Title,
}
