// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for `try_from_map` and `from_partial_with`.
//!
//! Builds arbitrary subsets of the 52-card domain and checks the validating
//! constructor accepts exactly the complete ones.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;
use totalmap::testing::Card;
use totalmap::{KeyDomain, TotalMap};

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<(u8, u16)>,
}

fuzz_target!(|input: Input| {
    let cards = Card::all();
    let raw: HashMap<Card, u16> = input
        .entries
        .iter()
        .map(|&(i, v)| (cards[usize::from(i) % cards.len()], v))
        .collect();

    let complete = raw.len() == cards.len();

    match TotalMap::try_from_map(raw.clone()) {
        Ok(map) => {
            assert!(complete);
            assert_eq!(map.len(), 52);
        }
        Err(err) => {
            assert!(!complete);
            assert_eq!(err.missing().len(), 52 - raw.len());
            assert!(err.missing().iter().all(|card| !raw.contains_key(card)));
        }
    }

    // Filling gaps always succeeds and keeps existing values
    let filled = TotalMap::from_partial_with(raw.clone(), |_| 0);
    assert!(filled.is_complete());
    for (card, value) in &raw {
        assert_eq!(filled[card], *value);
    }
});
