//! Fuzz target: textual item ID parsing.
//!
//! Any accepted input must be plain ASCII digits and must round-trip
//! through `Display` unchanged apart from leading zeros.

#![no_main]

use items_core::ItemId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Some(id) = ItemId::parse_lenient(raw) {
        assert!(raw.bytes().all(|b| b.is_ascii_digit()));
        assert!(id.get() > 0, "zero is never a valid item id");
        assert_eq!(id.to_string(), raw.trim_start_matches('0'));
    }
});
