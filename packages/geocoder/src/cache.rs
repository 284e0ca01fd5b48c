//! Process-lifetime memoization of geocoding results.
//!
//! The cache is an explicit object owned by the resolver and shared with
//! it for the life of the process. Keys are the exact address strings
//! from the location table; no normalization is applied, so two
//! spellings of the same address occupy two entries.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::Coordinates;

/// Memoized geocoding outcomes keyed by exact address string.
///
/// Stores `Option<Coordinates>` so that failed resolutions are memoized
/// too: a cached `None` means the address was looked up and could not be
/// resolved, which is distinct from an address that has never been seen.
#[derive(Debug, Default)]
pub struct GeocodeCache {
    entries: Mutex<HashMap<String, Option<Coordinates>>>,
}

impl GeocodeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached outcome for an address, or `None` if the
    /// address has never been resolved.
    ///
    /// # Panics
    ///
    /// Panics if the cache mutex is poisoned.
    #[must_use]
    pub fn get(&self, address: &str) -> Option<Option<Coordinates>> {
        self.entries
            .lock()
            .expect("Geocode cache mutex poisoned")
            .get(address)
            .copied()
    }

    /// Records the outcome of a resolution attempt for an address.
    ///
    /// # Panics
    ///
    /// Panics if the cache mutex is poisoned.
    pub fn put(&self, address: &str, coordinates: Option<Coordinates>) {
        self.entries
            .lock()
            .expect("Geocode cache mutex poisoned")
            .insert(address.to_owned(), coordinates);
    }

    /// Number of distinct addresses resolved so far.
    ///
    /// # Panics
    ///
    /// Panics if the cache mutex is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("Geocode cache mutex poisoned")
            .len()
    }

    /// Whether no address has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEOUL: Coordinates = Coordinates {
        latitude: 37.5665,
        longitude: 126.9780,
    };

    #[test]
    fn unseen_address_is_a_cache_miss() {
        let cache = GeocodeCache::new();
        assert!(cache.get("경기도 고양시").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn stored_coordinates_are_returned() {
        let cache = GeocodeCache::new();
        cache.put("경기도 고양시", Some(SEOUL));
        assert_eq!(cache.get("경기도 고양시"), Some(Some(SEOUL)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_resolution_is_memoized_distinctly_from_unseen() {
        let cache = GeocodeCache::new();
        cache.put("없는 주소", None);
        assert_eq!(cache.get("없는 주소"), Some(None));
        assert!(cache.get("다른 주소").is_none());
    }

    #[test]
    fn keys_are_exact_strings_without_normalization() {
        let cache = GeocodeCache::new();
        cache.put("경기도 고양시", Some(SEOUL));
        assert!(cache.get(" 경기도 고양시").is_none());
        assert!(cache.get("경기도 고양시 ").is_none());
    }

    #[test]
    fn later_put_overwrites_earlier_outcome() {
        let cache = GeocodeCache::new();
        cache.put("경기도 고양시", None);
        cache.put("경기도 고양시", Some(SEOUL));
        assert_eq!(cache.get("경기도 고양시"), Some(Some(SEOUL)));
        assert_eq!(cache.len(), 1);
    }
}
