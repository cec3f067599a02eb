//! # Vector types
//!
//! Row and column vectors are matrices of which one dimension has size one. They don't have
//! storage of their own: a vector is a view onto a dual index, like any matrix, and the row or
//! column of a matrix is connected to it.
//!
//! The types exist for the index arithmetic. A vector is indexed by one number, and the products
//! that involve a vector have their shapes fixed by the vector type.
pub use column::TransposedVector;
pub use row::Vector;

mod column;
#[cfg(feature = "serde")]
mod encoding;
mod row;
