//! Currency conversion requests, amounts, and the form's catalogue.

pub mod amount;
pub mod catalog;
pub mod conversion;

#[cfg(test)]
mod props;

pub use amount::{AmountError, coerce_amount, decimal_from_number, format_amount};
pub use catalog::{SUPPORTED_CURRENCIES, SupportedCurrency};
pub use conversion::{ConversionRequest, ConversionResult};
