#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Startup data loading for the accident map.
//!
//! Reads the LGA boundary `GeoJSON` and the severity table once, builds an
//! [`AccidentData`] context, and answers the read-only queries the
//! renderers need. Nothing here is reloaded or mutated after startup.

pub mod lga;
pub mod queries;
pub mod severity;

use std::path::{Path, PathBuf};

use accident_map_accident_models::{LgaAccidentRecord, SeverityRecord};
use thiserror::Error;

/// Errors that can occur while loading the datasets.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `GeoJSON` parsing or geometry conversion failed.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record was present but unusable.
    #[error("Invalid record: {message}")]
    InvalidRecord {
        /// Description of what went wrong.
        message: String,
    },

    /// The severity file extension is neither `.json` nor `.csv`.
    #[error("Unsupported severity file format: {}", path.display())]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// Wraps another error with the file it came from.
    #[error("{}: {source}", path.display())]
    File {
        /// File being loaded.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: Box<Self>,
    },
}

impl LoadError {
    /// Shorthand for [`LoadError::InvalidRecord`].
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Attaches the source file path.
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: Box::new(self),
        }
    }
}

/// Both datasets, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct AccidentData {
    lgas: Vec<LgaAccidentRecord>,
    severity: Vec<SeverityRecord>,
}

impl AccidentData {
    /// Builds a context from already-parsed records.
    #[must_use]
    pub const fn new(lgas: Vec<LgaAccidentRecord>, severity: Vec<SeverityRecord>) -> Self {
        Self { lgas, severity }
    }

    /// Loads both datasets from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing or malformed. There is
    /// no partial load.
    pub fn load(lga_path: &Path, severity_path: &Path) -> Result<Self, LoadError> {
        let lgas = lga::load_lgas(lga_path)?;
        let severity = severity::load_severity(severity_path)?;
        Ok(Self::new(lgas, severity))
    }

    /// LGA boundary records, in source order.
    #[must_use]
    pub fn lgas(&self) -> &[LgaAccidentRecord] {
        &self.lgas
    }

    /// Severity rows, in source order.
    #[must_use]
    pub fn severity_records(&self) -> &[SeverityRecord] {
        &self.severity
    }
}
