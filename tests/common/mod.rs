//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use totalmap::{KeyDomain, TotalMap};

// Re-export canonical fixture domains from totalmap::testing
pub use totalmap::testing::{Card, Color};

// ============================================================================
// BUILDERS
// ============================================================================

/// Red → 0, Green → 1, Blue → 2.
pub fn color_indices() -> TotalMap<Color, u8> {
    TotalMap::from_fn(Color::index)
}

/// Every card mapped to its display string.
pub fn card_names() -> TotalMap<Card, String> {
    TotalMap::from_fn(|card: &Card| card.to_string())
}

/// A raw mapping with an entry for every domain key except `skip`.
pub fn mapping_without<K, V, F>(skip: &K, mut f: F) -> HashMap<K, V>
where
    K: KeyDomain,
    F: FnMut(&K) -> V,
{
    K::all()
        .into_iter()
        .filter(|key| key != skip)
        .map(|key| {
            let value = f(&key);
            (key, value)
        })
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert I1 (keys equal the domain) and I2 (one entry per domain value).
pub fn assert_total<K, V>(map: &TotalMap<K, V>)
where
    K: KeyDomain + Clone + Debug,
{
    let keys: HashSet<K> = map.keys().cloned().collect();
    let domain: HashSet<K> = K::all().into_iter().collect();

    assert_eq!(
        keys, domain,
        "INVARIANT VIOLATED: I1 - keys() must equal the key domain"
    );
    assert_eq!(
        map.len(),
        K::cardinality(),
        "INVARIANT VIOLATED: I2 - entry count must equal the domain size"
    );
    assert!(map.is_complete());
    assert!(map.missing_keys().is_empty());
}
