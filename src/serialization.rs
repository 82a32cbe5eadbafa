//! Serde support.
//!
//! A `TotalMap` encodes exactly like its inner `HashMap<K, V>`: a plain keyed map,
//! no envelope, no version tag. Anything that reads a `HashMap<K, V>` can read it.
//!
//! Decoding is where it gets interesting. The payload might have been written
//! when `K` had fewer variants, or edited by hand. So the default `Deserialize`
//! re-checks completeness against the *current* `K::all()` and fails with the
//! `IncompleteDomain` message if anything is missing.
//!
//! If you need the old lax behavior (adopt whatever was stored, deal with gaps
//! later) use [`unchecked`] via `#[serde(with = ...)]`.

use std::collections::HashMap;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use crate::domain::KeyDomain;
use crate::map::TotalMap;

impl<K, V> Serialize for TotalMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_map().serialize(serializer)
    }
}

impl<'de, K, V> Deserialize<'de> for TotalMap<K, V>
where
    K: KeyDomain + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = HashMap::<K, V>::deserialize(deserializer)?;
        TotalMap::try_from_map(map).map_err(D::Error::custom)
    }
}

/// Lax encoding for `#[serde(with = "totalmap::serialization::unchecked")]`.
///
/// Decoding adopts the stored mapping without checking it covers the domain.
/// An incomplete payload produces a map whose `is_complete()` is false and whose
/// lookups of the missing keys panic. A warning is logged when that happens.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use totalmap::testing::Color;
/// use totalmap::TotalMap;
///
/// #[derive(Serialize, Deserialize)]
/// struct Snapshot {
///     #[serde(with = "totalmap::serialization::unchecked")]
///     brightness: TotalMap<Color, u8>,
/// }
///
/// let snapshot: Snapshot = serde_json::from_str(r#"{"brightness":{"Red":1}}"#).unwrap();
/// assert!(!snapshot.brightness.is_complete());
/// ```
pub mod unchecked {
    use super::*;

    /// Same wire shape as the checked `Serialize` impl.
    pub fn serialize<K, V, S>(map: &TotalMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize,
        V: Serialize,
        S: Serializer,
    {
        map.serialize(serializer)
    }

    /// Decode without re-validating completeness.
    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<TotalMap<K, V>, D::Error>
    where
        K: KeyDomain + Deserialize<'de>,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let map = TotalMap::from_map_unchecked(HashMap::<K, V>::deserialize(deserializer)?);
        if !map.is_complete() {
            tracing::warn!(
                missing = map.missing_keys().len(),
                domain = K::cardinality(),
                "adopted incomplete mapping without validation"
            );
        }
        Ok(map)
    }

    /// Wrapper for decoding an unchecked map as a top-level value.
    ///
    /// `serde_json::from_str::<Unchecked<K, V>>(..)?.0` reads a bare map the lax way.
    pub struct Unchecked<K, V>(pub TotalMap<K, V>);

    impl<'de, K, V> Deserialize<'de> for Unchecked<K, V>
    where
        K: KeyDomain + Deserialize<'de>,
        V: Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserialize(deserializer).map(Unchecked)
        }
    }

    impl<K, V> Serialize for Unchecked<K, V>
    where
        K: Serialize,
        V: Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.0.serialize(serializer)
        }
    }
}
