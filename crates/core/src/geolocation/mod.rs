//! Currency detection from an IP lookup or a postal address.
//!
//! Address mode is a two step resolution:
//! address → country code (geocoding) → currency code (country info).

pub mod address;
pub mod country;
pub mod detection;

pub use address::{AddressQuery, GeocodedAddress, GeocodedPlace};
pub use country::{first_currency_code, first_currency_mapping};
pub use detection::CurrencyDetection;
