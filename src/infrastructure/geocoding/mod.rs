//! Geocoding provider clients.

mod nominatim;

pub use nominatim::{DEFAULT_NOMINATIM_URL, NominatimProvider};
