#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the accident map server.
//!
//! Figures are returned as [`accident_map_figure_models::Figure`] directly;
//! the types here cover everything else the API exchanges.

use serde::{Deserialize, Serialize};

/// Query parameters for the bar-chart endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartQueryParams {
    /// LGA whose severity breakdown to chart. Missing means empty.
    pub selected_lga: Option<String>,
}

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LgaOption {
    /// Text shown to the user.
    pub label: String,
    /// Value sent back on selection.
    pub value: String,
}

impl From<&str> for LgaOption {
    fn from(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

/// Response from the LGA options endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLgaOptions {
    /// Options in first-seen order.
    pub options: Vec<LgaOption>,
    /// Initial selection.
    pub default_value: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
