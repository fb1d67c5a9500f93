//! Set algebra over hash sets.
//!
//! This module provides [`SuperSet`], a uniqueness-enforcing collection with
//! set-algebra operations, together with its iterators, hasher selection and
//! error types:
//!
//! - [`SuperSet`]: the container and its operations
//! - [`Iter`] / [`IntoIter`]: borrowing and owning iterators
//! - [`DefaultHashBuilder`]: the hasher used unless one is supplied
//! - [`SetAlgebraError`]: errors raised at the untyped boundary
//! - [`Operation`] / [`Outcome`]: operations applied to untyped candidates
//!   (`dynamic` feature)
//!
//! # Examples
//!
//! ```rust
//! use superset::set_algebra::SuperSet;
//! use std::collections::HashSet;
//!
//! let set = SuperSet::from(vec![4, 5, 6]);
//!
//! // Any finite iterable of the element type is a valid candidate.
//! let native: HashSet<i32> = [1, 2, 3, 4, 5].into_iter().collect();
//! assert_eq!(set.intersection(&native), SuperSet::from(vec![4, 5]));
//! assert_eq!(set.intersection(1..=5), SuperSet::from(vec![4, 5]));
//! assert_eq!(set.intersection(&SuperSet::from(vec![5, 4])), SuperSet::from(vec![4, 5]));
//! ```

mod error;
mod hasher;
mod iter;
mod superset;

#[cfg(feature = "dynamic")]
mod dynamic;

pub use error::{InvalidArgumentError, SetAlgebraError};
pub use hasher::DefaultHashBuilder;
pub use iter::{IntoIter, Iter};
pub use superset::SuperSet;

#[cfg(feature = "dynamic")]
pub use dynamic::{Operation, Outcome};
