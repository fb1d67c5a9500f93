//! # superset
//!
//! A hash set with set-algebra operations.
//!
//! ## Overview
//!
//! [`SuperSet`](set_algebra::SuperSet) holds unique elements and combines
//! itself with any finite iterable of the same element type:
//!
//! - **union**, **complement** (relative), **difference** (symmetric),
//!   **intersection** and **cartesian** product, each returning a new set
//! - **`subset_of`** and **`superset_of`** tests
//! - **`to_vec`** conversion, in insertion order
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `SuperSet`
//! - `dynamic`: operations on untyped `serde_json::Value` candidates
//! - `fxhash`: use `rustc_hash::FxBuildHasher` by default
//! - `ahash`: use `ahash::RandomState` by default
//! - `full`: enable `serde` and `dynamic`
//!
//! ## Example
//!
//! ```rust
//! use superset::prelude::*;
//!
//! let set = SuperSet::from(vec![4, 5, 6]);
//! let union = set.union(vec![1, 2, 3, 4, 5]);
//! assert_eq!(union, SuperSet::from(vec![1, 2, 3, 4, 5, 6]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use superset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set_algebra::*;
}

pub mod set_algebra;
