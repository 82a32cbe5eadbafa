// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Derive macro that writes `KeyDomain::all()` for you.
//!
//! The hand-written version of `all()` is a list of every variant, and the day
//! someone adds a variant and forgets the list, every `TotalMap` over that type
//! quietly stops covering it. Deriving it means the list is regenerated from the
//! type definition on every build.
//!
//! # What derives
//!
//! | Shape                                   | Values produced                        |
//! |-----------------------------------------|----------------------------------------|
//! | `enum E { A, B }`                       | `A`, `B`                               |
//! | `enum E { A, B(Inner) }`                | `A`, then `B(i)` for every `Inner`     |
//! | `enum E { A { inner: Inner } }`         | `A { inner }` for every `Inner`        |
//! | `struct Unit;`                          | `Unit`                                 |
//! | `struct Wrap(Inner);`                   | `Wrap(i)` for every `Inner`            |
//!
//! Variants are listed in declaration order. Fields must themselves be
//! `KeyDomain`. Anything with two or more fields is rejected: wrap a tuple
//! (`(A, B)` is a `KeyDomain`) if you want a product.
//!
//! # Example
//!
//! ```ignore
//! use totalmap::KeyDomain;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, KeyDomain)]
//! enum Target {
//!     Native,
//!     Wasm(Threads),
//! }
//! ```

use proc_macro::TokenStream;

mod key_domain;

/// Derive `totalmap::KeyDomain` for fieldless enums, enums whose variants wrap a
/// single `KeyDomain` field, unit structs, and newtypes.
///
/// # Generated Output
///
/// - `all()`: every value, variants in declaration order
/// - `cardinality()`: computed from field cardinalities without allocating
#[proc_macro_derive(KeyDomain)]
pub fn derive_key_domain(input: TokenStream) -> TokenStream {
    key_domain::derive(input)
}
