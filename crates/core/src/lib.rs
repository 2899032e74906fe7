//! Core conversion and geolocation logic for GeoConvert.
//!
//! This crate contains pure domain logic with ZERO web or HTTP dependencies.
//! Input normalization, validation rules, amount formatting, and the adapters
//! that read upstream payloads live here.
//!
//! # Modules
//!
//! - `currency` - Conversion requests, amount coercion and formatting
//! - `geolocation` - Address queries and country/currency resolution

pub mod currency;
pub mod geolocation;
