//! # Sparse integer matrices with connected views
//!
//! Matrices and vectors over signed integers, both machine sized and arbitrary precision, stored
//! sparsely in a row-major and a column-major index at the same time. Slices, transposes, rows and
//! columns are windows onto the storage of the matrix they were taken from: writing through one of
//! them is visible through all others that overlap it.
#![warn(missing_docs)]

pub mod data;
#[cfg(feature = "serde")]
pub mod io;
