use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::ItemId;

/// Caller-supplied item fields: an insertion-ordered map of JSON values.
///
/// The store treats the contents as opaque apart from the keys in
/// [`PROTECTED_FIELDS`].
pub type Payload = Map<String, Value>;

/// Keys owned by the store. Payload entries with these names are discarded.
pub const PROTECTED_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// A single record managed by the item store.
///
/// Serializes to a flat JSON object: `id`, then the payload fields in
/// insertion order, then `createdAt` and `updatedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Item {
    /// Store-assigned identifier, immutable after creation.
    pub id: ItemId,
    /// Free-form fields such as `name` and `description`.
    #[serde(flatten)]
    pub fields: Payload,
    /// When the item was created. Never changes.
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    /// When the item was last written.
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the `name` field when it is a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }
}

/// Returns `true` if `key` is reserved for the store.
#[must_use]
pub fn is_protected(key: &str) -> bool {
    PROTECTED_FIELDS.contains(&key)
}

/// Merges `payload` into `fields`, replacing same-named entries in place and
/// skipping protected keys.
pub(crate) fn merge_fields(fields: &mut Payload, payload: Payload) {
    for (key, value) in payload {
        if !is_protected(&key) {
            fields.insert(key, value);
        }
    }
}
