#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Figure renderers for the accident map.
//!
//! [`map::create_map`] draws the LGA choropleth once at startup and
//! [`bar::create_bar_chart`] draws the severity breakdown for whichever LGA
//! is selected. Both are pure functions of the loaded
//! [`accident_map_data::AccidentData`].

pub mod bar;
pub mod map;

pub use bar::create_bar_chart;
pub use map::create_map;

/// Axis and hover label for summed accident counts.
pub const ACCIDENT_COUNT_LABEL: &str = "Number of Accidents";
