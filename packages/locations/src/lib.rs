#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Patrol location table for the patrol-map application.
//!
//! Loads the station's CSV export into a two-level mapping
//! (administrative district → patrol location → [`PatrolRecord`]).
//! The table is built once at startup and never mutated afterwards; the
//! server shares it by reference across all requests.
//!
//! The source file keeps its localized column names (`행정동`, `순찰장소`,
//! `중점 활동사항`). A file missing any required column is rejected as a
//! whole; no partial table is ever produced.

mod loader;

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use patrol_map_patrol_models::PatrolRecord;
use thiserror::Error;

/// Column headers that must be present in the source CSV, verbatim.
pub const REQUIRED_COLUMNS: &[&str] =
    &["행정동", "순찰장소", "address", "description", "중점 활동사항"];

/// Errors from loading the patrol location table.
///
/// All variants are fatal at startup: the application refuses to serve
/// from an unreadable or schema-violating file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A row or the file itself could not be parsed as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// One or more required columns are missing from the header row.
    #[error("Missing required columns: {}", missing.join(", "))]
    MissingColumns {
        /// The required column names absent from the file.
        missing: Vec<String>,
    },
}

/// The immutable district → location → record mapping.
///
/// Both levels use `BTreeMap` so iteration order is deterministic;
/// insertion order in the source file is irrelevant. A duplicate
/// (district, location) pair in the source is resolved by the later row
/// silently overwriting the earlier one, and no whitespace or case
/// normalization is performed on any field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTable {
    districts: BTreeMap<String, BTreeMap<String, PatrolRecord>>,
}

impl LocationTable {
    /// Loads the table from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be opened, is not valid
    /// CSV, or is missing any of [`REQUIRED_COLUMNS`].
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        log::info!(
            "Loaded {} patrol locations across {} districts from {}",
            table.len(),
            table.district_count(),
            path.display()
        );
        Ok(table)
    }

    /// Loads the table from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the input is not valid CSV or is missing
    /// any of [`REQUIRED_COLUMNS`].
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        loader::read_table(reader).map(|districts| Self { districts })
    }

    /// Iterates over district names in deterministic order.
    pub fn districts(&self) -> impl Iterator<Item = &str> {
        self.districts.keys().map(String::as_str)
    }

    /// Iterates over the location names of a district, or `None` if the
    /// district is unknown.
    pub fn locations(&self, district: &str) -> Option<impl Iterator<Item = &str>> {
        self.districts
            .get(district)
            .map(|locations| locations.keys().map(String::as_str))
    }

    /// Looks up the record for a (district, location) pair.
    #[must_use]
    pub fn get(&self, district: &str, location: &str) -> Option<&PatrolRecord> {
        self.districts.get(district)?.get(location)
    }

    /// Number of districts in the table.
    #[must_use]
    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    /// Total number of patrol locations across all districts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.districts.values().map(BTreeMap::len).sum()
    }

    /// Whether the table contains no locations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.districts.values().all(BTreeMap::is_empty)
    }
}
