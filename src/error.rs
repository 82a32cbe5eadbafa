//! Construction errors.
//!
//! There is exactly one way to fail: hand a `TotalMap` constructor a mapping that
//! doesn't cover the key domain. Everything after construction is total.

use thiserror::Error;

/// A mapping was missing entries for one or more domain keys.
///
/// Returned by the validating constructors (`TotalMap::try_from_map`, `TryFrom`,
/// and `Deserialize`). The missing keys are listed in `KeyDomain::all()` order so
/// callers can report them or fill them in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mapping is missing {} of {} domain keys", .missing.len(), .domain_len)]
pub struct IncompleteDomain<K> {
    missing: Vec<K>,
    domain_len: usize,
}

impl<K> IncompleteDomain<K> {
    pub(crate) fn new(missing: Vec<K>, domain_len: usize) -> Self {
        debug_assert!(!missing.is_empty());
        Self {
            missing,
            domain_len,
        }
    }

    /// Domain keys that had no entry.
    pub fn missing(&self) -> &[K] {
        &self.missing
    }

    /// Size of the key domain the mapping was checked against.
    pub fn domain_len(&self) -> usize {
        self.domain_len
    }

    /// Take ownership of the missing keys.
    pub fn into_missing(self) -> Vec<K> {
        self.missing
    }
}
