//! `TotalMap`: a map with a value for every key in a finite domain.
//!
//! Instead of handling `None` at every lookup, check completeness once when the
//! map is built and index unconditionally forever after. There are three ways in:
//!
//! | Constructor         | Input              | On an incomplete input          |
//! |---------------------|--------------------|---------------------------------|
//! | `from_fn`           | `Fn(&K) -> V`      | can't happen                    |
//! | `try_from_map`      | `HashMap<K, V>`    | `Err(IncompleteDomain)`         |
//! | `from_pairs` / `total_map!` | literal pairs | panic (programmer error)   |
//!
//! # Invariants
//!
//! - **I1 (complete)**: `keys()` equals `K::all()` as a set.
//! - **I2 (fixed size)**: the entry count never changes after construction.
//!
//! Mutation only ever replaces values. There is no `insert` and no `remove`, and
//! no method hands out `&mut HashMap`, so the key set can't drift.
//!
//! The one escape hatch is `from_map_unchecked` (used by unchecked decoding).
//! A map built that way can break I1; `is_complete()` tells you.

use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::contracts;
use crate::domain::KeyDomain;
use crate::error::IncompleteDomain;

/// A map holding exactly one value for every key in `K`'s domain.
///
/// # Example
///
/// ```
/// use totalmap::{KeyDomain, TotalMap};
///
/// let mut votes = TotalMap::from_fn(|_: &bool| 0u32);
/// votes[&true] += 3;
/// votes.set(false, 1);
///
/// assert_eq!(votes[&true], 3);
/// assert_eq!(votes.get(&false), &1);
/// assert_eq!(votes.len(), bool::cardinality());
/// ```
#[derive(Clone)]
pub struct TotalMap<K, V> {
    inner: HashMap<K, V>,
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl<K: KeyDomain, V> TotalMap<K, V> {
    /// Build a map by calling `f` once for every key in the domain.
    ///
    /// Total by construction; this can't fail.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(&K) -> V,
    {
        let keys = K::all();
        let mut inner = HashMap::with_capacity(keys.len());
        for key in keys {
            let value = f(&key);
            inner.insert(key, value);
        }

        let map = Self { inner };
        contracts::check_total_map(&map);
        map
    }

    /// Adopt `map` if it has an entry for every domain key.
    ///
    /// The mapping is taken as-is. Returns `Err` listing the missing keys
    /// otherwise; extra entries never make an incomplete mapping acceptable.
    pub fn try_from_map(map: HashMap<K, V>) -> Result<Self, IncompleteDomain<K>> {
        let domain = K::all();
        let domain_len = domain.len();
        let missing: Vec<K> = domain
            .into_iter()
            .filter(|key| !map.contains_key(key))
            .collect();

        if !missing.is_empty() {
            tracing::debug!(
                missing = missing.len(),
                domain = domain_len,
                "rejected incomplete mapping"
            );
            return Err(IncompleteDomain::new(missing, domain_len));
        }

        let map = Self { inner: map };
        contracts::check_total_map(&map);
        Ok(map)
    }

    /// Adopt `map`, filling any missing domain keys from `fallback`.
    ///
    /// This is the "recover with defaults" path for callers that got an
    /// `IncompleteDomain` and would rather patch than report.
    pub fn from_partial_with<F>(mut map: HashMap<K, V>, mut fallback: F) -> Self
    where
        F: FnMut(&K) -> V,
    {
        for key in K::all() {
            if !map.contains_key(&key) {
                let value = fallback(&key);
                map.insert(key, value);
            }
        }

        let map = Self { inner: map };
        contracts::check_total_map(&map);
        map
    }

    /// Build a map from statically-known pairs.
    ///
    /// Later pairs overwrite earlier ones for the same key. Meant for literal
    /// tables written in source (see [`total_map!`](crate::total_map)), never for
    /// untrusted input: use [`try_from_map`](Self::try_from_map) for that.
    ///
    /// # Panics
    /// Panics if any domain key has no pair. This is a programmer error, not a
    /// recoverable condition.
    #[track_caller]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        match Self::try_from_map(pairs.into_iter().collect()) {
            Ok(map) => map,
            Err(err) => {
                tracing::error!(
                    missing = err.missing().len(),
                    domain = err.domain_len(),
                    "total map literal does not cover its key domain"
                );
                panic!(
                    "total map literal is missing {} of {} domain keys",
                    err.missing().len(),
                    err.domain_len()
                );
            }
        }
    }

    /// Adopt `map` without checking completeness.
    ///
    /// Exists for decoding paths that must accept whatever was stored (see
    /// `serialization::unchecked`). The result may violate I1: lookups of a
    /// missing key panic. Check [`is_complete`](Self::is_complete) before use.
    pub fn from_map_unchecked(map: HashMap<K, V>) -> Self {
        Self { inner: map }
    }
}

impl<K: KeyDomain, V: Default> Default for TotalMap<K, V> {
    fn default() -> Self {
        Self::from_fn(|_| V::default())
    }
}

impl<K: KeyDomain, V> TryFrom<HashMap<K, V>> for TotalMap<K, V> {
    type Error = IncompleteDomain<K>;

    fn try_from(map: HashMap<K, V>) -> Result<Self, Self::Error> {
        Self::try_from_map(map)
    }
}

impl<K, V> From<TotalMap<K, V>> for HashMap<K, V> {
    fn from(map: TotalMap<K, V>) -> Self {
        map.inner
    }
}

// ============================================================================
// ACCESS
// ============================================================================

const MISSING_KEY: &str = "key missing from total map built with from_map_unchecked";

impl<K: KeyDomain, V> TotalMap<K, V> {
    /// The value for `key`. Never misses on a validated map.
    pub fn get(&self, key: &K) -> &V {
        // I1: every domain key was checked at construction
        match self.inner.get(key) {
            Some(value) => value,
            None => panic!("{}", MISSING_KEY),
        }
    }

    /// Mutable access to the value for `key`.
    pub fn get_mut(&mut self, key: &K) -> &mut V {
        match self.inner.get_mut(key) {
            Some(value) => value,
            None => panic!("{}", MISSING_KEY),
        }
    }

    /// Bind `value` to `key`, dropping the old value.
    ///
    /// Keys are restricted to the domain by type, so this only ever changes a
    /// value. On an unchecked map it also restores a missing entry.
    pub fn set(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    /// Bind `value` to `key` and return the previous value.
    pub fn replace(&mut self, key: &K, value: V) -> V {
        std::mem::replace(self.get_mut(key), value)
    }
}

impl<K: KeyDomain, V> Index<&K> for TotalMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key)
    }
}

impl<K: KeyDomain, V> IndexMut<&K> for TotalMap<K, V> {
    fn index_mut(&mut self, key: &K) -> &mut V {
        self.get_mut(key)
    }
}

// ============================================================================
// QUERIES
// ============================================================================

impl<K, V> TotalMap<K, V> {
    /// Every key. Equal to `K::all()` as a set; order is unspecified.
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.inner.keys()
    }

    /// Every value, in the same unspecified order as [`iter`](Self::iter).
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.inner.values()
    }

    /// Mutable access to every value. Keys stay fixed.
    pub fn values_mut(&mut self) -> hash_map::ValuesMut<'_, K, V> {
        self.inner.values_mut()
    }

    /// Every `(key, value)` pair in the map's internal order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.inner.iter()
    }

    /// Every `(key, &mut value)` pair in the map's internal order.
    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, K, V> {
        self.inner.iter_mut()
    }

    /// Number of entries. Equal to `K::cardinality()` on a validated map.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True only for an empty key domain.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Read-only view of the underlying mapping.
    pub fn as_map(&self) -> &HashMap<K, V> {
        &self.inner
    }

    /// Give up the completeness guarantee and take the mapping.
    pub fn into_inner(self) -> HashMap<K, V> {
        self.inner
    }
}

impl<K: KeyDomain, V> TotalMap<K, V> {
    /// Pairs in `K::all()` order, skipping keys an unchecked map lacks.
    pub fn iter_domain_order(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        K::all()
            .into_iter()
            .filter_map(move |key| self.inner.get_key_value(&key))
    }

    /// Whether every domain key has an entry.
    ///
    /// Always true unless the map came from `from_map_unchecked`.
    pub fn is_complete(&self) -> bool {
        K::all().iter().all(|key| self.inner.contains_key(key))
    }

    /// Domain keys with no entry, in domain order. Empty on a validated map.
    pub fn missing_keys(&self) -> Vec<K> {
        K::all()
            .into_iter()
            .filter(|key| !self.inner.contains_key(key))
            .collect()
    }
}

// ============================================================================
// COMBINATORS
// ============================================================================

impl<K, V> TotalMap<K, V> {
    /// Apply `transform` to every pair and collect the results eagerly.
    pub fn map<R, F>(&self, mut transform: F) -> Vec<R>
    where
        F: FnMut(&K, &V) -> R,
    {
        self.inner.iter().map(|(k, v)| transform(k, v)).collect()
    }

    /// Run `body` on every pair, in the same order as [`map`](Self::map).
    pub fn for_each<F>(&self, mut body: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in &self.inner {
            body(k, v);
        }
    }

    /// Left fold over every pair.
    pub fn reduce<R, F>(&self, initial: R, accumulate: F) -> R
    where
        F: FnMut(R, (&K, &V)) -> R,
    {
        self.inner.iter().fold(initial, accumulate)
    }

    /// Left fold that updates the accumulator in place.
    pub fn reduce_into<R, F>(&self, mut initial: R, mut update: F) -> R
    where
        F: FnMut(&mut R, (&K, &V)),
    {
        for pair in &self.inner {
            update(&mut initial, pair);
        }
        initial
    }
}

impl<K: KeyDomain + Clone, V> TotalMap<K, V> {
    /// A new map over the same keys with transformed values.
    pub fn map_values<R, F>(&self, mut transform: F) -> TotalMap<K, R>
    where
        F: FnMut(&K, &V) -> R,
    {
        TotalMap {
            inner: self
                .inner
                .iter()
                .map(|(k, v)| (k.clone(), transform(k, v)))
                .collect(),
        }
    }

    /// Combine two maps over the same domain key by key.
    pub fn zip_with<W, R, F>(&self, other: &TotalMap<K, W>, mut combine: F) -> TotalMap<K, R>
    where
        F: FnMut(&K, &V, &W) -> R,
    {
        TotalMap::from_fn(|key| combine(key, self.get(key), other.get(key)))
    }
}

impl<K: KeyDomain, V> TotalMap<K, V> {
    /// Consume the map, transforming every value.
    pub fn into_map_values<R, F>(self, mut transform: F) -> TotalMap<K, R>
    where
        F: FnMut(&K, V) -> R,
    {
        TotalMap {
            inner: self
                .inner
                .into_iter()
                .map(|(k, v)| {
                    let r = transform(&k, v);
                    (k, r)
                })
                .collect(),
        }
    }
}

// ============================================================================
// ITERATION
// ============================================================================

impl<K, V> IntoIterator for TotalMap<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a TotalMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut TotalMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = hash_map::IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter_mut()
    }
}

// ============================================================================
// EQUALITY, HASHING, DEBUG
// ============================================================================

impl<K: KeyDomain, V: PartialEq> PartialEq for TotalMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: KeyDomain, V: Eq> Eq for TotalMap<K, V> {}

/// Hashes entries in domain order, so equal maps hash equally regardless of
/// their internal iteration order.
impl<K: KeyDomain, V: Hash> Hash for TotalMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.len().hash(state);
        for key in K::all() {
            if let Some(value) = self.inner.get(&key) {
                key.hash(state);
                value.hash(state);
            }
        }
    }
}

impl<K: KeyDomain + fmt::Debug, V: fmt::Debug> fmt::Debug for TotalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_domain_order()).finish()
    }
}

/// Build a [`TotalMap`] from literal `key => value` pairs.
///
/// Panics if the pairs don't cover the key domain. Use it for tables written
/// in source, where a missing key is a bug.
///
/// ```
/// use totalmap::{total_map, TotalMap};
///
/// let names: TotalMap<bool, &str> = total_map! {
///     false => "no",
///     true => "yes",
/// };
/// assert_eq!(names[&true], "yes");
/// ```
#[macro_export]
macro_rules! total_map {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::TotalMap::from_pairs([$(($key, $value)),*])
    };
}
