//! # Linear algebra primitives
//!
//! Sparse matrices and vectors that share their storage with the matrix they were derived from.
//! See the `matrix` module for how views onto the storage are created.

pub mod error;
pub mod matrix;
pub(crate) mod store;
pub mod vector;

/// A value together with its row and column index in a matrix.
pub type SparseTriple<F> = (usize, usize, F);
