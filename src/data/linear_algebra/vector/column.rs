//! # Column vectors
use std::collections::BTreeMap;
use std::fmt;

use crate::data::linear_algebra::error::{MatrixError, Result};
use crate::data::linear_algebra::matrix::{check_extent, Matrix};
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::Element;

/// A `len x 1` matrix.
pub struct TransposedVector<F> {
    matrix: Matrix<F>,
}

impl<F: Element> TransposedVector<F> {
    /// Create a column vector from its values.
    ///
    /// # Arguments
    ///
    /// * `len`: Length of the vector.
    /// * `values`: Either empty, for a vector of zeros, or exactly `len` values.
    pub fn new(len: usize, values: Vec<F>) -> Result<Self> {
        Matrix::new(len, 1, values).map(Self::wrap)
    }

    /// Create a column vector of zeros.
    pub fn zeros(len: usize) -> Self {
        Self::wrap(Matrix::zeros(len, 1))
    }

    /// Create a new vector with the same values, that is not connected to this one.
    pub fn copy(&self) -> Self {
        Self::wrap(self.matrix.copy())
    }

    /// Value at index `i`, zero if nothing is stored there.
    pub fn at(&self, i: usize) -> Result<F> {
        self.matrix.at(i, 0)
    }

    /// Set the value at index `i`.
    pub fn set(&mut self, i: usize, value: F) -> Result<()> {
        self.matrix.set(i, 0, value)
    }

    /// Replace the values of this vector, starting at index `at`, with the values of `source`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `source` would extend past the end of this vector.
    pub fn set_vec(&mut self, source: &Self, at: usize) -> Result<()> {
        check_extent(at, source.len(), self.len())?;

        self.matrix.set_matrix(&source.matrix, at, 0)
    }

    /// A vector of length `len` connected to this one, starting at index `i`.
    pub fn slice(&self, i: usize, len: usize) -> Result<Self> {
        self.matrix.slice(i, 0, len, 1).map(Self::wrap)
    }

    /// Inner product of this vector with `other`.
    pub fn dot(&self, other: &Self) -> Result<F> {
        if self.len() != other.len() {
            return Err(MatrixError::ShapeMismatch {
                operation: "dot",
                expected: self.matrix.dims(),
                found: other.matrix.dims(),
            });
        }

        let mut result = Matrix::zeros(1, 1);
        result.mul(&self.matrix.t(), &other.matrix)?;
        result.at(0, 0)
    }

    /// Store the product of `matrix` and the column vector `vector` in this vector.
    pub fn mul_vec(&mut self, matrix: &Matrix<F>, vector: &Self) -> Result<()> {
        self.matrix.mul(matrix, &vector.matrix)
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
            .map(|(i, _, value)| (i, value))
            .collect()
    }

    /// This vector as a row vector, connected to it.
    pub fn t(&self) -> Vector<F> {
        Vector::wrap(self.matrix.t())
    }
}

impl<F> TransposedVector<F> {
    pub(crate) fn wrap(matrix: Matrix<F>) -> Self {
        debug_assert_eq!(matrix.nr_columns(), 1);

        Self { matrix }
    }

    /// Number of values in this vector, including the zeros.
    pub fn len(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Whether the vector has length zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `len x 1` matrix this vector is a view of.
    pub fn as_matrix(&self) -> &Matrix<F> {
        &self.matrix
    }
}

impl<F: Element> PartialEq for TransposedVector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl<F: Element> Eq for TransposedVector<F> {
}

impl<F: Element> fmt::Debug for TransposedVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransposedVector")
            .field("len", &self.len())
            .field("values", &self.nonzero_values())
            .finish()
    }
}

impl<F: Element> fmt::Display for TransposedVector<F> {
    /// One value per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
