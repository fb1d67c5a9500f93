//! Error types for set-algebra operations.
//!
//! The typed API of [`SuperSet`](super::SuperSet) cannot fail: candidates are
//! checked for iterability by the compiler. These errors are produced at the
//! untyped boundary, where a candidate arrives as a runtime value.

use std::fmt;

/// A candidate argument did not satisfy the finite-iterable contract.
///
/// # Examples
///
/// ```rust
/// use superset::set_algebra::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "union",
///     found: "number",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "union: Argument must be of type 'Iterable' (found number)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The operation that rejected the argument.
    pub operation: &'static str,
    /// The kind of value that was supplied instead of an iterable.
    pub found: &'static str,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: Argument must be of type 'Iterable' (found {})",
            self.operation, self.found
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Errors raised by set-algebra operations on untyped input.
///
/// # Examples
///
/// ```rust
/// use superset::set_algebra::{InvalidArgumentError, SetAlgebraError};
///
/// let error = SetAlgebraError::InvalidArgument(InvalidArgumentError {
///     operation: "complement",
///     found: "object",
/// });
/// assert!(error.to_string().contains("'Iterable'"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetAlgebraError {
    /// The candidate is not a finite iterable.
    InvalidArgument(InvalidArgumentError),
    /// An element of the candidate is not of the receiver's element type.
    MismatchedElement {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// Position of the offending element within the candidate.
        index: usize,
        /// Why the element could not be read.
        message: String,
    },
}

impl SetAlgebraError {
    /// Shorthand for building an [`SetAlgebraError::InvalidArgument`].
    #[must_use]
    pub const fn invalid_argument(operation: &'static str, found: &'static str) -> Self {
        Self::InvalidArgument(InvalidArgumentError { operation, found })
    }

    /// Returns the name of the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::InvalidArgument(error) => error.operation,
            Self::MismatchedElement { operation, .. } => *operation,
        }
    }
}

impl fmt::Display for SetAlgebraError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
            Self::MismatchedElement {
                operation,
                index,
                message,
            } => write!(
                formatter,
                "{operation}: element at index {index} does not match the set's element type: {message}"
            ),
        }
    }
}

impl std::error::Error for SetAlgebraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::MismatchedElement { .. } => None,
        }
    }
}

impl From<InvalidArgumentError> for SetAlgebraError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}
