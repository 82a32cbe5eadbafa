// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the checked `Deserialize` impl.
//!
//! Decoding is the only path where untrusted bytes become a `TotalMap`. It must
//! return Err on garbage and on incomplete payloads, never panic, and never hand
//! back a map that violates completeness.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;
use totalmap::testing::Color;
use totalmap::TotalMap;

fuzz_target!(|data: &[u8]| {
    // Property 1: decoding never panics
    let checked = serde_json::from_slice::<TotalMap<Color, i64>>(data);
    let raw = serde_json::from_slice::<HashMap<Color, i64>>(data);

    match (checked, raw) {
        (Ok(map), Ok(raw)) => {
            // Property 2: an accepted map is complete and equals the raw decode
            assert!(map.is_complete(), "checked decode produced an incomplete map");
            assert_eq!(map.as_map(), &raw);
        }
        (Err(_), Ok(raw)) => {
            // Property 3: rejection of well-formed JSON only happens for gaps
            assert!(raw.len() < 3, "complete payload was rejected: {:?}", raw);
        }
        (Ok(_), Err(err)) => {
            panic!("checked decode accepted input the raw decode rejected: {}", err);
        }
        (Err(_), Err(_)) => {}
    }
});
