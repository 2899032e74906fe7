//! Request pipelines behind the HTTP handlers.
//!
//! Each service is a linear validate → call upstream → normalize pipeline.
//! Failures come back as `AppError`; upstream causes are logged here and
//! replaced by a generic message before they reach a caller.

pub mod conversion;
pub mod geolocation;

pub use conversion::ConversionService;
pub use geolocation::GeolocationService;
