#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Accident category buckets, severity codes and record types.
//!
//! These are the shared domain types for the accident map. LGA boundary
//! records carry an [`AccidentCategory`] derived from their accident count,
//! and severity records carry a raw numeric code that is relabeled through
//! [`AccidentSeverity`] when charted.

pub mod whole_number;

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Accident-count bucket for a local government area.
///
/// Buckets are right-open: `[0, 100)`, `[100, 500)`, `[500, 1000)` and
/// `[1000, ∞)`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AccidentCategory {
    /// Fewer than 100 accidents.
    Low,
    /// 100 to 499 accidents.
    Medium,
    /// 500 to 999 accidents.
    High,
    /// 1000 or more accidents.
    #[serde(rename = "Very High")]
    #[strum(serialize = "Very High")]
    VeryHigh,
}

impl AccidentCategory {
    /// Lower edge (inclusive) of the `Medium` bucket.
    pub const MEDIUM_MIN: u64 = 100;
    /// Lower edge (inclusive) of the `High` bucket.
    pub const HIGH_MIN: u64 = 500;
    /// Lower edge (inclusive) of the `Very High` bucket.
    pub const VERY_HIGH_MIN: u64 = 1000;

    /// Buckets an accident count.
    #[must_use]
    pub const fn from_count(count: u64) -> Self {
        if count < Self::MEDIUM_MIN {
            Self::Low
        } else if count < Self::HIGH_MIN {
            Self::Medium
        } else if count < Self::VERY_HIGH_MIN {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Human-readable label, as shown in the map legend.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Fill color used for this bucket on the choropleth.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "lightcoral",
            Self::Medium => "red",
            Self::High => "darkred",
            Self::VeryHigh => "maroon",
        }
    }

    /// Returns all variants in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::VeryHigh]
    }
}

/// Accident outcome severity, encoded in the source data as `1`, `2` or `3`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AccidentSeverity {
    /// Code 1.
    Mild = 1,
    /// Code 2.
    Severe = 2,
    /// Code 3.
    Fatal = 3,
}

impl AccidentSeverity {
    /// Returns the numeric code of this severity.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Creates a severity from its numeric code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not 1, 2 or 3.
    pub const fn from_code(code: i64) -> Result<Self, UnknownSeverityError> {
        match code {
            1 => Ok(Self::Mild),
            2 => Ok(Self::Severe),
            3 => Ok(Self::Fatal),
            _ => Err(UnknownSeverityError { code }),
        }
    }

    /// Chart label for a raw severity code.
    ///
    /// Known codes map to their variant name. Unknown codes keep their
    /// numeric form so their accidents stay visible.
    #[must_use]
    pub fn label_for_code(code: i64) -> String {
        Self::from_code(code).map_or_else(|_| code.to_string(), |s| s.to_string())
    }
}

/// Error returned for a severity code outside 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSeverityError {
    /// The code that was provided.
    pub code: i64,
}

impl std::fmt::Display for UnknownSeverityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown severity code {}: expected 1-3", self.code)
    }
}

impl std::error::Error for UnknownSeverityError {}

/// One local government area boundary and its accident total.
///
/// The category is fixed when the record is built and cannot change
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LgaAccidentRecord {
    index: usize,
    name: Option<String>,
    accident_count: u64,
    category: AccidentCategory,
    boundary: MultiPolygon<f64>,
}

impl LgaAccidentRecord {
    /// Builds a record, categorizing `accident_count`.
    #[must_use]
    pub const fn new(
        index: usize,
        name: Option<String>,
        accident_count: u64,
        boundary: MultiPolygon<f64>,
    ) -> Self {
        Self {
            index,
            name,
            accident_count,
            category: AccidentCategory::from_count(accident_count),
            boundary,
        }
    }

    /// Position of the feature in the source file.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// LGA name, when the source feature carried one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Total accidents recorded for this area.
    #[must_use]
    pub const fn accident_count(&self) -> u64 {
        self.accident_count
    }

    /// Bucket derived from [`Self::accident_count`].
    #[must_use]
    pub const fn category(&self) -> AccidentCategory {
        self.category
    }

    /// Area boundary.
    #[must_use]
    pub const fn boundary(&self) -> &MultiPolygon<f64> {
        &self.boundary
    }
}

/// A row of the severity dataset.
///
/// Several rows may share the same LGA and severity; they are summed when
/// charted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityRecord {
    /// LGA name, matched exactly against the dropdown selection.
    #[serde(rename = "LGA_NAME")]
    pub lga_name: String,
    /// Raw severity code.
    #[serde(
        rename = "SEVERITY",
        deserialize_with = "whole_number::deserialize_code"
    )]
    pub severity: i64,
    /// Accident count contributed by this row.
    #[serde(
        rename = "ACCIDENT_NO",
        deserialize_with = "whole_number::deserialize_count"
    )]
    pub accident_count: u64,
}

/// Summed accident count for one severity code within an LGA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCount {
    /// Raw severity code.
    pub severity: i64,
    /// Chart label for the code.
    pub label: String,
    /// Sum of accident counts.
    pub accident_count: u64,
}
