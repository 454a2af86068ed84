//! Fuzz target: parsing and validating a `POST /items` body.
//!
//! Arbitrary bytes must never panic the payload parser, the create
//! validator, or the store, and accepted bodies always yield item 1.

#![no_main]

use items_core::{ItemStore, Payload};
use items_gateway::routes::validate_create;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = serde_json::from_slice::<Payload>(data) else {
        return;
    };
    if validate_create(&payload).is_err() {
        return;
    }
    let store = ItemStore::new();
    let item = store.create(payload);
    assert_eq!(item.id.get(), 1);
    assert_eq!(item.created_at, item.updated_at);
    assert!(item.name().is_some(), "validated payload must keep its string name");
});
