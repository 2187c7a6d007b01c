//! Order Numbers

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Prefix used when the customer country has no entry in [`COUNTRY_PREFIXES`].
pub const FALLBACK_PREFIX: &str = "XX";

/// Country name to order-number prefix.
pub const COUNTRY_PREFIXES: [(&str, &str); 3] = [
    ("Venezuela", "VE"),
    ("Colombia", "CO"),
    ("El Salvador", "SV"),
];

const SUFFIX_MODULUS: i64 = 1_000_000;

/// Human-facing order number, e.g. `VE-482913`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Build an order number for a customer in `country` at `now`.
    ///
    /// The suffix is the last six digits of the millisecond timestamp.
    pub fn generate(country: &str, now: Timestamp) -> Self {
        let suffix = now.as_millisecond().rem_euclid(SUFFIX_MODULUS);

        Self(format!("{}-{suffix:06}", prefix_for(country)))
    }

    /// The order number as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order-number prefix for `country`.
pub fn prefix_for(country: &str) -> &'static str {
    COUNTRY_PREFIXES
        .iter()
        .find(|(name, _)| *name == country)
        .map_or(FALLBACK_PREFIX, |&(_, prefix)| prefix)
}
