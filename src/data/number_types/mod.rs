//! # Number types
//!
//! All data structures are generic over the element type they store. This module defines what is
//! required of such an element and re-exports the arbitrary precision integer that is supported
//! next to the primitive signed integers.
pub use num_bigint::BigInt;

pub mod traits;
