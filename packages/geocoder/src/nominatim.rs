//! Nominatim / OpenStreetMap geocoder client.
//!
//! Nominatim has strict rate limits: **1 request per second** maximum.
//! The patrol workload stays far below that because every address is
//! memoized after its first lookup.
//!
//! See <https://nominatim.org/release-docs/develop/api/Search/>

use crate::service::GeocodingService;
use crate::{Coordinates, GeocodeError};

/// Geocodes a free-form address using the Nominatim search endpoint,
/// requesting a single best match restricted to the configured country
/// and language.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request or response parsing fails.
pub async fn geocode_freeform(
    client: &reqwest::Client,
    service: &GeocodingService,
    address: &str,
) -> Result<Option<Coordinates>, GeocodeError> {
    let resp = client
        .get(&service.base_url)
        .query(&[
            ("q", address),
            ("countrycodes", service.country_code.as_str()),
            ("accept-language", service.language.as_str()),
            ("format", "jsonv2"),
            ("limit", "1"),
        ])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses Nominatim JSON response.
fn parse_response(body: &serde_json::Value) -> Result<Option<Coordinates>, GeocodeError> {
    let results = body.as_array().ok_or_else(|| GeocodeError::Parse {
        message: "Nominatim response is not an array".to_string(),
    })?;

    let Some(first) = results.first() else {
        return Ok(None);
    };

    let latitude = first["lat"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lat in Nominatim response".to_string(),
        })?;

    let longitude = first["lon"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lon in Nominatim response".to_string(),
        })?;

    Ok(Some(Coordinates {
        latitude,
        longitude,
    }))
}
