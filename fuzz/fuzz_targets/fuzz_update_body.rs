//! Fuzz target: merging an arbitrary `PUT /items/{id}` body.
//!
//! Whatever the payload contains, the merged item keeps its ID and
//! creation time, and serializes to JSON.

#![no_main]

use items_core::{ItemStore, Payload};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = serde_json::from_slice::<Payload>(data) else {
        return;
    };
    let store = ItemStore::new();
    let mut seed = Payload::new();
    seed.insert("name".to_owned(), serde_json::Value::from("seed"));
    let original = store.create(seed);

    let updated = store.update(original.id, payload).expect("item 1 exists");
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);

    let json = serde_json::to_value(&updated).expect("item serialization must not fail");
    assert_eq!(json["id"], 1);
});
