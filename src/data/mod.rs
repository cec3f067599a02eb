//! # Storing of matrices in memory
//!
//! This module provides the number types that can be stored and the sparse data structures that
//! store them.

pub mod linear_algebra;
pub mod number_types;
