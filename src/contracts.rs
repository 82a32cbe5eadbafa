//! Runtime contracts for the completeness invariant.
//!
//! These are debug-mode assertions that verify the properties every `TotalMap`
//! promises. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Catch broken `KeyDomain` impls that the type system can't see
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                          |
//! |--------------------------|---------------------------------------------------|
//! | `check_domain_distinct`  | `K::all()` lists no value twice                   |
//! | `check_complete`         | every `k` in `K::all()` has an entry (I1)         |
//! | `check_no_foreign_keys`  | the mapping holds exactly `K::cardinality()` keys |
//! | `check_total_map`        | all of the above, for a constructed map           |
//!
//! # Usage
//!
//! ```ignore
//! use totalmap::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_total_map(&map);
//!
//! // In release builds, this is a no-op
//! ```

use std::collections::{HashMap, HashSet};

use crate::domain::KeyDomain;
use crate::map::TotalMap;

// ============================================================================
// DOMAIN CONTRACTS
// ============================================================================

/// Check that a key domain enumerates each value once.
///
/// # Panics (debug builds only)
/// Panics if `K::all()` contains a duplicate, or disagrees with `K::cardinality()`.
#[inline]
pub fn check_domain_distinct<K: KeyDomain>() {
    if cfg!(debug_assertions) {
        let all = K::all();
        let mut seen = HashSet::with_capacity(all.len());
        for (i, key) in all.iter().enumerate() {
            debug_assert!(
                seen.insert(key),
                "Contract violation: KeyDomain.Distinct - all()[{}] repeats an earlier value",
                i
            );
        }

        debug_assert_eq!(
            all.len(),
            K::cardinality(),
            "Contract violation: KeyDomain.Cardinality - all().len() {} != cardinality() {}",
            all.len(),
            K::cardinality()
        );
    }
}

// ============================================================================
// MAPPING CONTRACTS
// ============================================================================

/// Check that every domain key has an entry.
///
/// # Panics (debug builds only)
/// Panics on the first domain key with no entry.
#[inline]
pub fn check_complete<K: KeyDomain, V>(map: &HashMap<K, V>) {
    if cfg!(debug_assertions) {
        for (i, key) in K::all().iter().enumerate() {
            debug_assert!(
                map.contains_key(key),
                "Contract violation: TotalMap.Complete - no entry for all()[{}]",
                i
            );
        }
    }
}

/// Check that the mapping holds no keys outside the enumerated domain.
///
/// Given completeness, an entry count above `K::cardinality()` can only come from
/// a `KeyDomain` impl whose `all()` forgot some values.
///
/// # Panics (debug builds only)
/// Panics if `map.len() != K::cardinality()`.
#[inline]
pub fn check_no_foreign_keys<K: KeyDomain, V>(map: &HashMap<K, V>) {
    debug_assert_eq!(
        map.len(),
        K::cardinality(),
        "Contract violation: TotalMap.Closed - {} entries for a domain of {}",
        map.len(),
        K::cardinality()
    );
}

/// Full contract check for a constructed map.
#[inline]
pub fn check_total_map<K: KeyDomain, V>(map: &TotalMap<K, V>) {
    check_domain_distinct::<K>();
    check_complete(map.as_map());
    check_no_foreign_keys(map.as_map());
}
