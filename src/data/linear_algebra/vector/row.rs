//! # Row vectors
use std::collections::BTreeMap;
use std::fmt;

use crate::data::linear_algebra::error::{MatrixError, Result};
use crate::data::linear_algebra::matrix::{check_extent, Matrix};
use crate::data::linear_algebra::vector::TransposedVector;
use crate::data::number_types::traits::Element;

/// A `1 x len` matrix.
pub struct Vector<F> {
    matrix: Matrix<F>,
}

impl<F: Element> Vector<F> {
    /// Create a vector from its values.
    ///
    /// # Arguments
    ///
    /// * `len`: Length of the vector.
    /// * `values`: Either empty, for a vector of zeros, or exactly `len` values.
    pub fn new(len: usize, values: Vec<F>) -> Result<Self> {
        Matrix::new(1, len, values).map(Self::wrap)
    }

    /// Create a vector of zeros.
    pub fn zeros(len: usize) -> Self {
        Self::wrap(Matrix::zeros(1, len))
    }

    /// Create a new vector with the same values, that is not connected to this one.
    pub fn copy(&self) -> Self {
        Self::wrap(self.matrix.copy())
    }

    /// Value at index `i`, zero if nothing is stored there.
    pub fn at(&self, i: usize) -> Result<F> {
        self.matrix.at(0, i)
    }

    /// Set the value at index `i`.
    pub fn set(&mut self, i: usize, value: F) -> Result<()> {
        self.matrix.set(0, i, value)
    }

    /// Replace the values of this vector, starting at index `at`, with the values of `source`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `source` would extend past the end of this vector.
    pub fn set_vec(&mut self, source: &Self, at: usize) -> Result<()> {
        check_extent(at, source.len(), self.len())?;

        self.matrix.set_matrix(&source.matrix, 0, at)
    }

    /// A vector of length `len` connected to this one, starting at index `i`.
    pub fn slice(&self, i: usize, len: usize) -> Result<Self> {
        self.matrix.slice(0, i, 1, len).map(Self::wrap)
    }

    /// Inner product of this vector with `other`.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<F> {
        if self.len() != other.len() {
            return Err(MatrixError::ShapeMismatch {
                operation: "dot",
                expected: self.matrix.dims(),
                found: other.matrix.dims(),
            });
        }

        let mut result = Matrix::zeros(1, 1);
        result.mul(&self.matrix, &other.matrix.t())?;
        result.at(0, 0)
    }

    /// Store the product of the row vector `vector` and `matrix` in this vector.
    pub fn mul(&mut self, vector: &Self, matrix: &Matrix<F>) -> Result<()> {
        self.matrix.mul(&vector.matrix, matrix)
    }

    /// Store the sum of `a` and `b` in this vector.
    pub fn add(&mut self, a: &Self, b: &Self) -> Result<()> {
        self.matrix.add(&a.matrix, &b.matrix)
    }

    /// Replace every value by its additive inverse, in place.
    pub fn negate(&mut self) {
        self.matrix.negate();
    }

    /// The nonzero values by their index.
    pub fn nonzero_values(&self) -> BTreeMap<usize, F> {
        self.matrix.nonzero_values().into_iter()
            .map(|(_, j, value)| (j, value))
            .collect()
    }

    /// This vector as a column vector, connected to it.
    pub fn t(&self) -> TransposedVector<F> {
        TransposedVector::wrap(self.matrix.t())
    }
}

impl<F> Vector<F> {
    /// Use a matrix with a single row as a vector.
    pub(crate) fn wrap(matrix: Matrix<F>) -> Self {
        debug_assert_eq!(matrix.nr_rows(), 1);

        Self { matrix }
    }

    /// Number of values in this vector, including the zeros.
    pub fn len(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// Whether the vector has length zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `1 x len` matrix this vector is a view of.
    pub fn as_matrix(&self) -> &Matrix<F> {
        &self.matrix
    }
}

impl<F: Element> PartialEq for Vector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl<F: Element> Eq for Vector<F> {
}

impl<F: Element> fmt::Debug for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len())
            .field("values", &self.nonzero_values())
            .finish()
    }
}

impl<F: Element> fmt::Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
