//! Total maps over finite key domains.
//!
//! A `TotalMap<K, V>` holds exactly one `V` for every value of `K`. Completeness
//! is checked once, when the map is built, so lookups return `&V` instead of
//! `Option<&V>` and the "missing key" branch disappears from every call site.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  domain.rs  │────▶│    map.rs    │────▶│ serialization.rs │
//! │ (KeyDomain) │     │  (TotalMap)  │     │  (serde, lax)    │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                   contracts.rs                       │
//! │  (Distinct domain, Complete map, no foreign keys -   │
//! │   debug assertions at every construction exit)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Name | Statement                                          | Enforced by            |
//! |------|----------------------------------------------------|------------------------|
//! | I1   | `keys()` equals `K::all()` as a set                | constructors           |
//! | I2   | entry count never changes after construction       | no insert/remove API   |
//!
//! # Usage
//!
//! ```
//! use totalmap::{total_map, KeyDomain, TotalMap};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, KeyDomain)]
//! enum Stage {
//!     Parse,
//!     Check,
//!     Emit,
//! }
//!
//! // From a generator: can't fail
//! let mut timings = TotalMap::from_fn(|_: &Stage| 0u64);
//! timings[&Stage::Check] += 12;
//!
//! // From a literal table: panics if a stage is missing
//! let labels: TotalMap<Stage, &str> = total_map! {
//!     Stage::Parse => "parse",
//!     Stage::Check => "check",
//!     Stage::Emit => "emit",
//! };
//!
//! assert_eq!(timings[&Stage::Check], 12);
//! assert_eq!(labels[&Stage::Emit], "emit");
//! ```
//!
//! # Features
//!
//! | Feature    | Default | Adds                                          |
//! |------------|---------|-----------------------------------------------|
//! | `serde`    | yes     | `Serialize`/`Deserialize`, `serialization`    |
//! | `derive`   | yes     | `#[derive(KeyDomain)]`                        |
//! | `strum`    | no      | `strum_key_domain!` for `EnumIter` types       |
//! | `parallel` | no      | `par_from_fn`, `par_map_values` via rayon      |

// Lets the derive's `::totalmap::` paths resolve inside this crate too.
extern crate self as totalmap;

pub mod contracts;
mod domain;
mod error;
mod map;
pub mod testing;

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "serde")]
pub mod serialization;

pub use domain::KeyDomain;
pub use error::IncompleteDomain;
pub use map::TotalMap;

#[cfg(feature = "derive")]
pub use totalmap_derive::KeyDomain;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "strum")]
    pub use strum::IntoEnumIterator;
}
