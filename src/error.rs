//! Error types for numtower

use thiserror::Error;

/// Result type alias using numtower's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numtower operations
///
/// Only invalid arguments are errors. Numerically degenerate results (division
/// by a zero modulus, `0^0`, singular matrices) are reported as NaN-filled
/// values instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid axis / dimension index
    #[error("Invalid dimension {dim} for value with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension
        dim: usize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Per-axis sizes of a Cartesian tensor must all be equal
    #[error("Cartesian tensor axes must share one size, got {dims:?}")]
    NonCartesianShape {
        /// Requested per-axis sizes
        dims: Vec<usize>,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Operation that is undefined for this kind of value
    #[error("Unsupported operation '{op}': {reason}")]
    Unsupported {
        /// The operation name
        op: &'static str,
        /// Why the operation is undefined
        reason: String,
    },

    /// Malformed literal text
    #[error("Cannot parse '{input}': {reason}")]
    Parse {
        /// Text being parsed
        input: String,
        /// What went wrong
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(op: &'static str, reason: impl Into<String>) -> Self {
        Self::Unsupported {
            op,
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
