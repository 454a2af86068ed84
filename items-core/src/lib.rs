//! Core types for the items service.
//!
//! Defines the item record, its identifier, and the process-local
//! [`ItemStore`] that owns every item and assigns IDs.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod item;
pub mod store;
pub mod timestamp;

pub use error::CoreError;
pub use id::ItemId;
pub use item::{is_protected, Item, Payload, PROTECTED_FIELDS};
pub use store::ItemStore;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_id_parses_plain_digits() {
        let id: ItemId = match "42".parse() {
            Ok(id) => id,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn item_id_rejects_malformed_input() {
        for raw in ["", "0", "-3", "+3", "3 ", "0x10", "1e3", "١٢"] {
            assert!(raw.parse::<ItemId>().is_err(), "{raw:?} must be rejected");
            assert!(ItemId::parse_lenient(raw).is_none());
        }
    }

    #[test]
    fn item_id_error_mentions_raw_input() {
        let err = match "abc".parse::<ItemId>() {
            Ok(id) => panic!("expected error, got {id}"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("'abc'"), "Display must include the input");
    }

    #[test]
    fn item_serializes_flat_with_camel_case_timestamps() {
        let store = ItemStore::new();
        let mut payload = Payload::new();
        payload.insert("name".to_owned(), json!("A"));
        payload.insert("description".to_owned(), json!("first"));
        let item = store.create(payload);

        let value = match serde_json::to_value(&item) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "A");
        assert_eq!(value["description"], "first");
        assert_eq!(value["createdAt"], value["updatedAt"]);
        let created = value["createdAt"].as_str().unwrap_or_default();
        assert!(created.ends_with('Z') && created.len() == 24, "unexpected timestamp {created}");

        let keys: Vec<&str> = match value.as_object() {
            Some(map) => map.keys().map(String::as_str).collect(),
            None => panic!("item must serialize to an object"),
        };
        assert_eq!(keys, ["id", "name", "description", "createdAt", "updatedAt"]);
    }

    #[test]
    fn item_deserializes_from_wire_form() {
        let raw = json!({
            "id": 3,
            "name": "C",
            "tags": ["x"],
            "createdAt": "2026-10-19T08:09:10.123Z",
            "updatedAt": "2026-10-19T08:09:11.000Z"
        });
        let item: Item = match serde_json::from_value(raw) {
            Ok(i) => i,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(item.id, ItemId::new(3));
        assert_eq!(item.name(), Some("C"));
        assert_eq!(item.fields.len(), 2, "only payload keys belong in fields");
        assert!(item.updated_at > item.created_at);
        assert_eq!(timestamp::format(&item.created_at), "2026-10-19T08:09:10.123Z");
    }
}
