//! Pagination count that tolerates the API's inconsistent `count` encodings.
//!
//! Depending on endpoint and schema revision, `count` arrives as:
//! - a JSON number (`"count": 12`)
//! - a numeric string (`"count": "12"`)
//! - a URL string (`"count": "https://www.courtlistener.com/api/rest/v4/dockets/?count=on"`)
//!
//! The first two decode to the integer. The URL form decodes to an unknown
//! count: `get()` reports it as `0` and `is_known()` returns false. Any other
//! value fails the enclosing response decode.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Prefix marking a `count` string that is really a link.
const URL_PREFIX: &str = "http";

/// Number of records matching a query, or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationCount(Option<u64>);

impl PaginationCount {
    /// The count the API reported as a URL.
    pub const UNKNOWN: Self = Self(None);

    /// Normalize one raw `count` value.
    ///
    /// Numbers are tried first, then strings; a string starting with `http`
    /// short-circuits to [`PaginationCount::UNKNOWN`] before any integer parse.
    pub fn from_json(raw: &Value) -> Result<Self, CountError> {
        match raw {
            Value::Number(n) => n
                .as_u64()
                .map(|n| Self(Some(n)))
                .ok_or_else(|| CountError::OutOfRange { raw: n.to_string() }),
            Value::String(s) if s.starts_with(URL_PREFIX) => Ok(Self::UNKNOWN),
            Value::String(s) => s
                .parse::<u64>()
                .map(|n| Self(Some(n)))
                .map_err(|source| CountError::UnparseableString { raw: s.clone(), source }),
            other => Err(CountError::UnsupportedKind { raw: other.to_string() }),
        }
    }

    /// The count, with unknown reported as `0`.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.unwrap_or(0)
    }

    /// The count, or `None` when the API did not report one.
    #[must_use]
    pub const fn known(self) -> Option<u64> {
        self.0
    }

    /// False when the API sent a URL instead of a count.
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0.is_some()
    }
}

impl PartialEq<u64> for PaginationCount {
    fn eq(&self, other: &u64) -> bool {
        self.get() == *other
    }
}

impl fmt::Display for PaginationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for PaginationCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json(&raw).map_err(serde::de::Error::custom)
    }
}

/// Why a `count` value could not be normalized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    /// String that is neither a URL nor a non-negative integer
    #[error("pagination count: unable to convert string {raw:?} to an integer: {source}")]
    UnparseableString {
        /// The string as received
        raw: String,
        /// Integer parse failure
        #[source]
        source: std::num::ParseIntError,
    },

    /// Negative, fractional or oversized number
    #[error("pagination count: {raw} is not a non-negative integer")]
    OutOfRange {
        /// The number as received
        raw: String,
    },

    /// Object, array, boolean or null
    #[error("pagination count: unable to decode {raw}")]
    UnsupportedKind {
        /// The JSON value as received
        raw: String,
    },
}
