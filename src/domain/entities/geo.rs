//! Geocoding value types: cache keys and coordinate results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address produced by the report transform when city, street and state are all blank.
pub const BLANK_REPORT_ADDRESS: &str = ", , , USA";

/// Namespace prefix for geocoding entries in the shared cache store.
pub const KEY_PREFIX: &str = "geo:";

/// Cache key derived from a free-text address.
///
/// Only case is folded. Whitespace and punctuation are kept verbatim, so
/// `"1 Main St"` and `"1  Main St"` map to different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeoKey(String);

impl GeoKey {
    /// Derives the key `geo:<lower-cased address>`.
    pub fn from_address(address: &str) -> Self {
        Self(format!("{}{}", KEY_PREFIX, address.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coordinates resolved for an address.
///
/// A pair of `None` is a real, cacheable answer meaning "no coordinates could be
/// determined". Serialized as `{"lat": <number|null>, "lon": <number|null>}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoResult {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl GeoResult {
    /// The negative result.
    pub const fn none() -> Self {
        Self {
            lat: None,
            lon: None,
        }
    }

    pub const fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    /// Returns both coordinates when they are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lon)
    }

    pub fn is_none(&self) -> bool {
        self.lat.is_none() && self.lon.is_none()
    }
}

/// Returns true for addresses that are never sent to the provider.
pub fn is_degenerate_address(address: &str) -> bool {
    address.trim().is_empty() || address == BLANK_REPORT_ADDRESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_folds_case() {
        assert_eq!(
            GeoKey::from_address("123 Main St, Denver, CO"),
            GeoKey::from_address("123 MAIN ST, DENVER, CO")
        );
        assert_eq!(
            GeoKey::from_address("123 Main St, Denver, CO").as_str(),
            "geo:123 main st, denver, co"
        );
    }

    #[test]
    fn test_key_keeps_whitespace_and_punctuation() {
        assert_ne!(
            GeoKey::from_address("123 Main St"),
            GeoKey::from_address("123  Main St")
        );
        assert_ne!(
            GeoKey::from_address("123 Main St."),
            GeoKey::from_address("123 Main St")
        );
    }

    #[test]
    fn test_degenerate_addresses() {
        assert!(is_degenerate_address(""));
        assert!(is_degenerate_address("   "));
        assert!(is_degenerate_address(", , , USA"));
        assert!(!is_degenerate_address(" , , , USA"));
        assert!(!is_degenerate_address("1600 Broadway, Denver, CO, USA"));
    }

    #[test]
    fn test_geo_result_serialization() {
        let json = serde_json::to_string(&GeoResult::none()).unwrap();
        assert_eq!(json, r#"{"lat":null,"lon":null}"#);

        let parsed: GeoResult = serde_json::from_str(r#"{"lat":39.7392,"lon":-104.9903}"#).unwrap();
        assert_eq!(parsed, GeoResult::new(39.7392, -104.9903));
        assert_eq!(parsed.coordinates(), Some((39.7392, -104.9903)));
    }
}
