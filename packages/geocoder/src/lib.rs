#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Address geocoding for the patrol-map application.
//!
//! Resolves free-text Korean postal addresses to coordinates using the
//! Nominatim search API, constrained to South Korea and Korean-language
//! results and asking for a single best match.
//!
//! Results are memoized in an explicit [`cache::GeocodeCache`] keyed by
//! the exact address string for the lifetime of the process, including
//! misses, so an unresolvable address is looked up at most once. Provider
//! failures degrade to "unmapped" for that address; they are never
//! surfaced as errors to the render path.

pub mod cache;
pub mod nominatim;
pub mod resolver;
pub mod service;

use thiserror::Error;

/// A resolved coordinate pair (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,
}
