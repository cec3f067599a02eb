//! # Traits
//!
//! Sparse data structures never store the additive identity, so the elements they hold need to be
//! able to recognise it and to produce it when an absent value is read. Next to that, the
//! arithmetic of the matrices only needs a commutative ring: addition, negation and
//! multiplication. The element types are restricted to integers, floating point numbers are not
//! supported.
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, Mul};

use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Element of a `Matrix` or one of the vector types.
///
/// Automatically implemented for all types satisfying the trait's bounds, which includes the
/// primitive signed integers and `BigInt`.
pub trait Element:
    Integer + // Zero, One, equality and the four operations on owned values
    Signed + // Additive inverse
    for<'r> AddAssign<&'r Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
{
}
impl<T> Element for T
where
    T: Integer + Signed + for<'r> AddAssign<&'r T> + for<'r> Mul<&'r T, Output=T> + Clone + Display + Debug,
{
}

/// Interpretation of a number as a truth value.
///
/// The zero element is false, every other value is true. True is written back as the
/// multiplicative identity.
pub trait Truth: Zero + One {
    /// Whether this value is considered true.
    fn is_true(&self) -> bool {
        !self.is_zero()
    }

    /// The element representing a boolean.
    ///
    /// # Return value
    ///
    /// One for `true`, zero for `false`.
    fn from_truth(value: bool) -> Self {
        if value {
            Self::one()
        } else {
            Self::zero()
        }
    }
}
impl<T: Zero + One> Truth for T {
}
