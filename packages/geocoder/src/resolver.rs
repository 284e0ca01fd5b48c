//! Cache-first coordinate resolution.
//!
//! The resolver owns the HTTP client, the service configuration, and the
//! process-lifetime cache. Every distinct address is sent to the provider
//! at most once; repeated lookups are served from the cache, and provider
//! failures degrade to an unmapped outcome instead of an error.

use std::time::Duration;

use crate::cache::GeocodeCache;
use crate::service::GeocodingService;
use crate::{Coordinates, GeocodeError, nominatim};

/// Resolves patrol addresses to coordinates through the configured
/// geocoding service, memoizing every outcome.
#[derive(Debug)]
pub struct CoordinateResolver {
    client: reqwest::Client,
    service: GeocodingService,
    cache: GeocodeCache,
}

impl CoordinateResolver {
    /// Creates a resolver for the given service with an empty cache.
    ///
    /// The HTTP client is built with the service's fixed per-request
    /// timeout; there is no further timeout escalation.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn new(service: GeocodingService) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(service.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            service,
            cache: GeocodeCache::new(),
        })
    }

    /// Resolves an address to coordinates, or `None` if the address is
    /// unmapped for this session.
    ///
    /// A cache hit returns without touching the network. On a miss the
    /// provider is queried exactly once and the outcome (including a
    /// no-match or a caught provider failure) is cached for the rest of
    /// the process.
    pub async fn resolve(&self, address: &str) -> Option<Coordinates> {
        if let Some(cached) = self.cache.get(address) {
            log::debug!("Geocode cache hit for {address}");
            return cached;
        }

        let resolved = match nominatim::geocode_freeform(&self.client, &self.service, address).await
        {
            Ok(Some(coordinates)) => Some(coordinates),
            Ok(None) => {
                log::warn!("Address could not be resolved: {address}");
                None
            }
            Err(e) => {
                log::error!("Geocoding failed for {address}: {e}");
                None
            }
        };

        self.cache.put(address, resolved);
        resolved
    }

    /// The resolver's process-lifetime cache.
    #[must_use]
    pub const fn cache(&self) -> &GeocodeCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITY_HALL: Coordinates = Coordinates {
        latitude: 37.6584,
        longitude: 126.8320,
    };

    /// A service whose endpoint refuses connections, so any network
    /// attempt fails immediately.
    fn unreachable_service() -> GeocodingService {
        GeocodingService {
            id: "nominatim".to_string(),
            name: "Nominatim / OpenStreetMap".to_string(),
            base_url: "http://127.0.0.1:9/search".to_string(),
            country_code: "kr".to_string(),
            language: "ko".to_string(),
            timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn cache_hit_is_served_without_a_lookup() {
        let resolver = CoordinateResolver::new(unreachable_service()).unwrap();
        resolver.cache().put("경기도 고양시청", Some(CITY_HALL));

        // The endpoint is unreachable, so a network attempt would
        // degrade to None; getting coordinates back proves the cache
        // answered first.
        assert_eq!(resolver.resolve("경기도 고양시청").await, Some(CITY_HALL));
    }

    #[tokio::test]
    async fn repeated_resolution_returns_identical_results() {
        let resolver = CoordinateResolver::new(unreachable_service()).unwrap();
        resolver.cache().put("경기도 고양시청", Some(CITY_HALL));

        let first = resolver.resolve("경기도 고양시청").await;
        let second = resolver.resolve("경기도 고양시청").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_unmapped_and_is_memoized() {
        let resolver = CoordinateResolver::new(unreachable_service()).unwrap();

        assert_eq!(resolver.resolve("경기도 고양시 일산서구").await, None);
        // The failure outcome is now pinned in the cache; the second
        // call is a cache hit, not a retry.
        assert_eq!(resolver.cache().get("경기도 고양시 일산서구"), Some(None));
        assert_eq!(resolver.resolve("경기도 고양시 일산서구").await, None);
        assert_eq!(resolver.cache().len(), 1);
    }

    #[tokio::test]
    async fn memoized_failure_is_not_shared_across_spellings() {
        let resolver = CoordinateResolver::new(unreachable_service()).unwrap();

        resolver.resolve("경기도 고양시").await;
        assert!(resolver.cache().get(" 경기도 고양시").is_none());
    }
}
