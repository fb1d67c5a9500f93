//! Set algebra over untyped candidates.
//!
//! The typed API of [`SuperSet`] proves at compile time that a candidate is a
//! finite iterable of the right element type. Input that arrives as data
//! (here a [`serde_json::Value`]) carries no such proof, so this module checks
//! it at runtime:
//!
//! 1. The candidate must be an array. Anything else is rejected with
//!    [`SetAlgebraError::InvalidArgument`] before any element is read.
//! 2. Every element must deserialize as the set's element type. The first
//!    element that does not is reported as
//!    [`SetAlgebraError::MismatchedElement`].
//!
//! Only then is the typed operation run. A rejected call leaves the receiver
//! untouched and produces no partial result.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use superset::set_algebra::{Operation, Outcome, SetAlgebraError, SuperSet};
//!
//! let set: SuperSet<i32> = SuperSet::from(vec![4, 5, 6]);
//!
//! let outcome = set.apply_value(Operation::Intersection, &json!([1, 2, 3, 4, 5])).unwrap();
//! assert_eq!(outcome, Outcome::Set(SuperSet::from(vec![4, 5])));
//!
//! let error = set.apply_value(Operation::Union, &json!(6)).unwrap_err();
//! assert!(matches!(error, SetAlgebraError::InvalidArgument(_)));
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::SetAlgebraError;
use super::superset::SuperSet;

// =============================================================================
// Operation
// =============================================================================

/// The binary set-algebra operations reachable through
/// [`SuperSet::apply_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`SuperSet::union`]
    Union,
    /// [`SuperSet::complement`]
    Complement,
    /// [`SuperSet::difference`]
    Difference,
    /// [`SuperSet::intersection`]
    Intersection,
    /// [`SuperSet::cartesian`]
    Cartesian,
    /// [`SuperSet::subset_of`]
    SubsetOf,
    /// [`SuperSet::superset_of`]
    SupersetOf,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Union,
        Self::Complement,
        Self::Difference,
        Self::Intersection,
        Self::Cartesian,
        Self::SubsetOf,
        Self::SupersetOf,
    ];

    /// The method name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Complement => "complement",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
            Self::Cartesian => "cartesian",
            Self::SubsetOf => "subset_of",
            Self::SupersetOf => "superset_of",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// The result of an operation applied through [`SuperSet::apply_value`].
#[derive(Clone)]
pub enum Outcome<T, S> {
    /// `union`, `complement`, `difference` and `intersection`.
    Set(SuperSet<T, S>),
    /// `cartesian`.
    Product(SuperSet<(T, T), S>),
    /// `subset_of` and `superset_of`.
    Truth(bool),
}

impl<T, S> Outcome<T, S> {
    /// Returns the set, if this outcome is one.
    #[must_use]
    pub fn into_set(self) -> Option<SuperSet<T, S>> {
        match self {
            Self::Set(set) => Some(set),
            Self::Product(_) | Self::Truth(_) => None,
        }
    }

    /// Returns the cartesian product, if this outcome is one.
    #[must_use]
    pub fn into_product(self) -> Option<SuperSet<(T, T), S>> {
        match self {
            Self::Product(product) => Some(product),
            Self::Set(_) | Self::Truth(_) => None,
        }
    }

    /// Returns the boolean answer, if this outcome is one.
    #[must_use]
    pub const fn as_truth(&self) -> Option<bool> {
        match self {
            Self::Truth(truth) => Some(*truth),
            Self::Set(_) | Self::Product(_) => None,
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for Outcome<T, S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Set(left), Self::Set(right)) => left == right,
            (Self::Product(left), Self::Product(right)) => left == right,
            (Self::Truth(left), Self::Truth(right)) => left == right,
            _ => false,
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Outcome<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(set) => formatter.debug_tuple("Set").field(set).finish(),
            Self::Product(product) => formatter.debug_tuple("Product").field(product).finish(),
            Self::Truth(truth) => formatter.debug_tuple("Truth").field(truth).finish(),
        }
    }
}

// =============================================================================
// Boundary Validation
// =============================================================================

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads `candidate` as a set of `T`, rejecting non-arrays and elements of
/// the wrong type.
fn read_candidate<T, S>(
    operation: &'static str,
    candidate: &Value,
    hash_builder: S,
) -> Result<SuperSet<T, S>, SetAlgebraError>
where
    T: DeserializeOwned + Hash + Eq,
    S: BuildHasher,
{
    let Value::Array(elements) = candidate else {
        let found = kind_of(candidate);
        debug!(operation, found, "rejected non-iterable candidate");
        return Err(SetAlgebraError::invalid_argument(operation, found));
    };

    let mut set = SuperSet::with_capacity_and_hasher(elements.len(), hash_builder);
    for (index, element) in elements.iter().enumerate() {
        let element = T::deserialize(element).map_err(|error| {
            debug!(operation, index, %error, "rejected candidate element");
            SetAlgebraError::MismatchedElement {
                operation,
                index,
                message: error.to_string(),
            }
        })?;
        set.insert(element);
    }
    Ok(set)
}

impl<T, S> SuperSet<T, S>
where
    T: DeserializeOwned + Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    /// Builds a set from a JSON array.
    ///
    /// # Errors
    ///
    /// [`SetAlgebraError::InvalidArgument`] if `value` is not an array, and
    /// [`SetAlgebraError::MismatchedElement`] if one of its elements is not a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use superset::set_algebra::SuperSet;
    ///
    /// let set: SuperSet<String> = SuperSet::from_value(&json!(["a", "b", "a"])).unwrap();
    /// assert_eq!(set.to_vec(), vec!["a".to_string(), "b".to_string()]);
    ///
    /// assert!(SuperSet::<String>::from_value(&json!({"a": 1})).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, SetAlgebraError>
    where
        S: Default,
    {
        read_candidate("from_value", value, S::default())
    }

    /// Applies `operation` to this set and an untyped `candidate`.
    ///
    /// # Errors
    ///
    /// [`SetAlgebraError::InvalidArgument`] if `candidate` is not an array,
    /// and [`SetAlgebraError::MismatchedElement`] if one of its elements is
    /// not a `T`. In both cases no part of the operation has run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use superset::set_algebra::{Operation, SuperSet};
    ///
    /// let set: SuperSet<i32> = SuperSet::from(vec![1, 2, 3]);
    /// let outcome = set.apply_value(Operation::SubsetOf, &json!([1, 2, 3, 4, 5])).unwrap();
    /// assert_eq!(outcome.as_truth(), Some(true));
    /// ```
    pub fn apply_value(
        &self,
        operation: Operation,
        candidate: &Value,
    ) -> Result<Outcome<T, S>, SetAlgebraError> {
        let candidate: Self = read_candidate(operation.name(), candidate, self.hasher().clone())?;
        let outcome = match operation {
            Operation::Union => Outcome::Set(self.union(candidate)),
            Operation::Complement => Outcome::Set(self.complement(candidate)),
            Operation::Difference => Outcome::Set(self.difference(candidate)),
            Operation::Intersection => Outcome::Set(self.intersection(candidate)),
            Operation::Cartesian => Outcome::Product(self.cartesian(candidate)),
            Operation::SubsetOf => Outcome::Truth(self.subset_of(candidate)),
            Operation::SupersetOf => Outcome::Truth(self.superset_of(candidate)),
        };
        Ok(outcome)
    }
}
