//! Compile-time embedded geocoding service configuration.
//!
//! The Nominatim provider is defined in a TOML file under `services/`
//! and embedded at compile time, so the binary carries its own endpoint
//! and search constraints.

use serde::Deserialize;

/// A geocoding service configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingService {
    /// Unique identifier (e.g., `"nominatim"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Search endpoint URL.
    pub base_url: String,
    /// ISO country code the search is restricted to.
    pub country_code: String,
    /// Language requested for match results.
    pub language: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

const NOMINATIM_TOML: &str = include_str!("../services/nominatim.toml");

/// Returns the embedded Nominatim service configuration.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (this is a compile-time
/// guarantee since the config is embedded).
#[must_use]
pub fn nominatim() -> GeocodingService {
    toml::de::from_str(NOMINATIM_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse geocoding service 'nominatim': {e}"))
}
