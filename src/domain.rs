//! Finite key domains.
//!
//! A `KeyDomain` is a type whose values can be listed exhaustively. That list is
//! what a `TotalMap` checks itself against: if every value from `all()` has an
//! entry, lookups can never miss.
//!
//! # Laws (the stuff that breaks if you ignore it)
//!
//! - **Finite**: `all()` terminates and returns every value of the type.
//! - **Distinct**: no value appears twice. Checked by
//!   `contracts::check_domain_distinct` in debug builds.
//! - **Stable**: `all()` returns the same values in the same order on every call.
//!
//! Hand-written impls are fine, but `#[derive(KeyDomain)]` gets the list right
//! for you and keeps it in sync when variants are added.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::hash::Hash;

/// A finite, enumerable key type.
///
/// # Example
///
/// ```
/// use totalmap::KeyDomain;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Light {
///     Off,
///     On,
/// }
///
/// impl KeyDomain for Light {
///     fn all() -> Vec<Self> {
///         vec![Light::Off, Light::On]
///     }
/// }
///
/// assert_eq!(Light::cardinality(), 2);
/// ```
pub trait KeyDomain: Sized + Eq + Hash {
    /// Every value of the type, in a fixed order, without duplicates.
    fn all() -> Vec<Self>;

    /// Number of values in the domain.
    fn cardinality() -> usize {
        Self::all().len()
    }

    /// Position of `self` within `all()`.
    ///
    /// Returns `None` only for a broken impl whose `all()` omits a value.
    fn domain_index(&self) -> Option<usize> {
        Self::all().iter().position(|k| k == self)
    }
}

impl KeyDomain for bool {
    fn all() -> Vec<Self> {
        vec![false, true]
    }

    fn cardinality() -> usize {
        2
    }
}

impl KeyDomain for () {
    fn all() -> Vec<Self> {
        vec![()]
    }

    fn cardinality() -> usize {
        1
    }
}

impl KeyDomain for Ordering {
    fn all() -> Vec<Self> {
        vec![Ordering::Less, Ordering::Equal, Ordering::Greater]
    }

    fn cardinality() -> usize {
        3
    }
}

/// The empty domain. A `TotalMap<Infallible, V>` is trivially complete.
impl KeyDomain for Infallible {
    fn all() -> Vec<Self> {
        Vec::new()
    }

    fn cardinality() -> usize {
        0
    }
}

/// `None` first, then `Some(k)` for every `k` in `K::all()`.
impl<K: KeyDomain> KeyDomain for Option<K> {
    fn all() -> Vec<Self> {
        std::iter::once(None)
            .chain(K::all().into_iter().map(Some))
            .collect()
    }

    fn cardinality() -> usize {
        K::cardinality() + 1
    }
}

/// Cartesian product in row-major order: all `(a0, _)` before any `(a1, _)`.
impl<A, B> KeyDomain for (A, B)
where
    A: KeyDomain + Clone,
    B: KeyDomain,
{
    fn all() -> Vec<Self> {
        let rows = A::all();
        let mut all = Vec::with_capacity(rows.len() * B::cardinality());
        for a in rows {
            all.extend(B::all().into_iter().map(|b| (a.clone(), b)));
        }
        all
    }

    fn cardinality() -> usize {
        A::cardinality() * B::cardinality()
    }
}

/// Implements [`KeyDomain`] for enums that derive `strum::EnumIter`.
///
/// ```ignore
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
/// enum Phase { Parse, Check, Emit }
///
/// totalmap::strum_key_domain!(Phase);
/// ```
#[cfg(feature = "strum")]
#[macro_export]
macro_rules! strum_key_domain {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::KeyDomain for $ty {
                fn all() -> ::std::vec::Vec<Self> {
                    <$ty as $crate::__private::IntoEnumIterator>::iter().collect()
                }
            }
        )+
    };
}
