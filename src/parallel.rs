//! Parallel construction for expensive values.
//!
//! Most key domains are a handful of variants and the sequential constructors are
//! the right call. When the generator is the expensive part (loading a model per
//! backend, compiling a table per target) the keys are embarrassingly parallel:
//! `into_par_iter()` over `K::all()`, collect, done.
//!
//! Results are identical to `from_fn` / `map_values`. The map itself stays a plain
//! value; nothing here adds locking.

use rayon::prelude::*;

use crate::contracts;
use crate::domain::KeyDomain;
use crate::map::TotalMap;

impl<K, V> TotalMap<K, V>
where
    K: KeyDomain + Send,
    V: Send,
{
    /// Like [`from_fn`](Self::from_fn), evaluating `f` on the rayon pool.
    pub fn par_from_fn<F>(f: F) -> Self
    where
        F: Fn(&K) -> V + Sync,
    {
        let inner = K::all()
            .into_par_iter()
            .map(|key| {
                let value = f(&key);
                (key, value)
            })
            .collect();

        let map = Self::from_map_unchecked(inner);
        contracts::check_total_map(&map);
        map
    }
}

impl<K, V> TotalMap<K, V>
where
    K: KeyDomain + Clone + Send + Sync,
    V: Sync,
{
    /// Like [`map_values`](Self::map_values), evaluating `transform` on the rayon pool.
    pub fn par_map_values<R, F>(&self, transform: F) -> TotalMap<K, R>
    where
        R: Send,
        F: Fn(&K, &V) -> R + Sync,
    {
        let inner = self
            .as_map()
            .par_iter()
            .map(|(key, value)| (key.clone(), transform(key, value)))
            .collect();

        TotalMap::from_map_unchecked(inner)
    }
}
