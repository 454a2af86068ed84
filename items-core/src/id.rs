use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of an item, assigned by the store from a monotonic counter.
///
/// IDs start at 1 and are never reused, even after the item is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ItemId(pub u64);

impl ItemId {
    /// Wraps a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parses a textual ID, mapping every malformed input to `None`.
    ///
    /// Lookups treat an unparsable ID exactly like an ID that was never
    /// assigned, so callers only ever see "found" or "not found".
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = CoreError;

    /// Accepts only plain ASCII digits. Signs, whitespace and zero are rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidItemId { raw: raw.to_owned() };
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match raw.parse::<u64>() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(value) => Ok(Self(value)),
        }
    }
}
