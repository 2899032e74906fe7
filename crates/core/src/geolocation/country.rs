//! Country-info payload adapter.
//!
//! The provider answers either with an array of countries or with a single
//! country object. Both shapes reduce to the first entry's `currencies`
//! mapping.

use serde_json::{Map, Value};

/// Returns the first entry's currency mapping, or `None`.
///
/// `[ { "currencies": {..} }, .. ]` and `{ "currencies": {..} }` both yield the
/// inner mapping. Anything else, including a non-object `currencies`, yields
/// `None`.
#[must_use]
pub fn first_currency_mapping(payload: &Value) -> Option<&Map<String, Value>> {
    let entry = match payload {
        Value::Array(entries) => entries.first()?,
        other => other,
    };
    entry.get("currencies")?.as_object()
}

/// Returns the first listed currency code of the first entry.
///
/// Keys keep document order, so "first" is the provider's first listing.
/// An empty first key counts as no currency.
#[must_use]
pub fn first_currency_code(payload: &Value) -> Option<String> {
    first_currency_mapping(payload)?
        .keys()
        .next()
        .filter(|code| !code.is_empty())
        .cloned()
}
