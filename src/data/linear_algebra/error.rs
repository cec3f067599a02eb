//! # Errors of matrix and vector operations
//!
//! All errors describe a violated precondition of the caller: an index out of range, operands of
//! the wrong shape or a destination that overlaps one of its inputs. None of them are expected to
//! be recovered from by retrying.
use thiserror::Error;

/// Result of a fallible operation on a matrix or vector.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// A precondition of a matrix or vector operation was not met.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// An index was not in the range `[0, len)` of the dimension it indexes.
    #[error("index {index} out of range [0, {len})")]
    OutOfBounds {
        /// Offending index, relative to the view it was used on.
        index: usize,
        /// Size of the dimension.
        len: usize,
    },
    /// The operands of an operation have incompatible shapes.
    ///
    /// Shapes are given as `(rows, columns)`.
    #[error("{operation}: expected shape {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// The shape that would have been valid.
        expected: (usize, usize),
        /// The shape that was provided.
        found: (usize, usize),
    },
    /// An argument is invalid regardless of the shapes involved.
    ///
    /// The contained `String` is a message for the end user.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The destination of an operation shares storage with one of its inputs, in a region that
    /// both of them can see.
    #[error("{operation}: destination overlaps an operand")]
    SelfAliasing {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },
}
