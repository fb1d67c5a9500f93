//! Hash builder selection.
//!
//! [`DefaultHashBuilder`] is the `BuildHasher` a [`SuperSet`](super::SuperSet)
//! uses when none is given explicitly. It is chosen at compile time:
//!
//! - `fxhash` feature: [`rustc_hash::FxBuildHasher`]
//! - `ahash` feature: [`ahash::RandomState`]
//! - otherwise: [`std::hash::RandomState`]
//!
//! When both fast-hash features are enabled, `fxhash` wins.

#[cfg(feature = "fxhash")]
/// Hash builder used by default (`fxhash` feature).
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// Hash builder used by default (`ahash` feature).
pub type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// Hash builder used by default.
pub type DefaultHashBuilder = std::hash::RandomState;
