//! # Arithmetic on matrices
//!
//! Operations that write their result into a destination matrix (`self`). The destination may be a
//! slice or transpose of another matrix, but it may not overlap one of the operands: the algorithms
//! clear the destination before reading all of their input.
//!
//! All algorithms iterate over the stored values only. Multiplication walks the rows of the left
//! operand that hold values, the columns of the right operand that hold values, and intersects the
//! two to compute each inner product.
use itertools::{EitherOrBoth, Itertools};
use tracing::{debug, trace};

use crate::data::linear_algebra::SparseTriple;
use crate::data::linear_algebra::error::{MatrixError, Result};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::{Element, Truth};

impl<F: Element> Matrix<F> {
    /// Store the sum of `a` and `b` in this matrix.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` unless all three matrices have the same shape, `SelfAliasing` if this matrix
    /// overlaps `a` or `b`. Sharing storage is not enough for the latter: disjoint slices of one
    /// matrix can be added into each other.
    pub fn add(&mut self, a: &Self, b: &Self) -> Result<()> {
        check_same_shape("add", a, b)?;
        check_same_shape("add", a, self)?;
        self.check_disjoint("add", a, b)?;

        let b_values = b.nonzero_values();
        self.overwrite(self.row_start, self.column_start, self.rows, self.columns, a.nonzero_values());

        let mut store = self.store.borrow_mut();
        for (i, j, value) in b_values {
            let (row, column) = (self.row_start + i, self.column_start + j);
            let sum = match store.get_oriented(self.transposed, row, column) {
                Some(current) => {
                    let mut sum = current.clone();
                    sum += &value;
                    sum
                },
                None => value,
            };
            store.set_oriented(self.transposed, row, column, sum);
        }

        Ok(())
    }

    /// Store the product of `a` and `b` in this matrix.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the number of columns of `a` differs from the number of rows of `b`, or
    /// if this matrix doesn't have as many rows as `a` and as many columns as `b`. `SelfAliasing`
    /// if this matrix overlaps `a` or `b` in their shared storage. A destination that shares
    /// storage with an operand, but none of its values, is accepted.
    pub fn mul(&mut self, a: &Self, b: &Self) -> Result<()> {
        if a.columns != b.rows {
            return Err(MatrixError::ShapeMismatch {
                operation: "mul",
                expected: (a.columns, b.columns),
                found: b.dims(),
            });
        }
        if self.dims() != (a.rows, b.columns) {
            return Err(MatrixError::ShapeMismatch {
                operation: "mul",
                expected: (a.rows, b.columns),
                found: self.dims(),
            });
        }
        self.check_disjoint("mul", a, b)?;

        let products = sparse_product(a, b);
        trace!(left = ?a.dims(), right = ?b.dims(), nonzero = products.len(), "multiplied matrices");
        self.overwrite(self.row_start, self.column_start, self.rows, self.columns, products);

        Ok(())
    }

    /// Raise this matrix to the power `k` using exponentiation by squaring.
    ///
    /// This matrix is not changed, the result is a new matrix.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if this matrix is not square.
    pub fn pow(&self, k: u32) -> Result<Self> {
        if self.rows != self.columns {
            return Err(MatrixError::InvalidArgument(format!(
                "matrix must be square to raise to a power, got {} x {}", self.rows, self.columns,
            )));
        }

        let len = self.rows;
        let mut result = Self::identity(len);
        if k == 0 {
            return Ok(result);
        }

        let mut base = self.copy();
        let mut remaining = k;
        let mut multiplications = 0;
        loop {
            if remaining & 1 == 1 {
                let mut product = Self::zeros(len, len);
                product.mul(&result, &base)?;
                result = product;
                multiplications += 1;
            }

            remaining >>= 1;
            if remaining == 0 {
                break;
            }

            let mut square = Self::zeros(len, len);
            square.mul(&base, &base)?;
            base = square;
            multiplications += 1;
        }

        debug!(len, k, multiplications, "raised matrix to a power");
        Ok(result)
    }

    /// Replace every value by its additive inverse, in place.
    pub fn negate(&mut self) {
        let values = self.nonzero_values();

        let mut store = self.store.borrow_mut();
        for (i, j, value) in values {
            store.set_oriented(self.transposed, self.row_start + i, self.column_start + j, -value);
        }
    }

    /// Store the elementwise logical and of `x` and `y` in this matrix.
    ///
    /// Nonzero values are true, a true result is stored as one. Shapes and overlap are checked as
    /// in `Matrix::add`.
    pub fn and(&mut self, x: &Self, y: &Self) -> Result<()> {
        self.logical("and", x, y, |p, q| p && q)
    }

    /// Store the elementwise logical or of `x` and `y` in this matrix.
    pub fn or(&mut self, x: &Self, y: &Self) -> Result<()> {
        self.logical("or", x, y, |p, q| p || q)
    }

    /// Store the elementwise exclusive or of `x` and `y` in this matrix.
    pub fn xor(&mut self, x: &Self, y: &Self) -> Result<()> {
        self.logical("xor", x, y, |p, q| p != q)
    }

    /// Apply a boolean operation elementwise.
    ///
    /// Only positions where `x` or `y` holds a value are visited, so `operation(false, false)` has
    /// to be `false`.
    fn logical(
        &mut self,
        name: &'static str,
        x: &Self,
        y: &Self,
        operation: impl Fn(bool, bool) -> bool,
    ) -> Result<()> {
        check_same_shape(name, x, y)?;
        check_same_shape(name, x, self)?;
        self.check_disjoint(name, x, y)?;

        let values = x.nonzero_values().into_iter()
            .merge_join_by(y.nonzero_values(), |(i, j, _), (k, l, _)| (i, j).cmp(&(k, l)))
            .filter_map(|pair| {
                let (i, j, truth) = match pair {
                    EitherOrBoth::Left((i, j, p)) => (i, j, operation(p.is_true(), false)),
                    EitherOrBoth::Right((i, j, q)) => (i, j, operation(false, q.is_true())),
                    EitherOrBoth::Both((i, j, p), (_, _, q)) => (i, j, operation(p.is_true(), q.is_true())),
                };
                truth.then(|| (i, j, F::from_truth(true)))
            })
            .collect();
        self.overwrite(self.row_start, self.column_start, self.rows, self.columns, values);

        Ok(())
    }

    fn check_disjoint(&self, operation: &'static str, a: &Self, b: &Self) -> Result<()> {
        if self.overlaps(a) || self.overlaps(b) {
            Err(MatrixError::SelfAliasing { operation })
        } else {
            Ok(())
        }
    }
}

fn check_same_shape<F>(operation: &'static str, expected: &Matrix<F>, found: &Matrix<F>) -> Result<()> {
    if expected.dims() == found.dims() {
        Ok(())
    } else {
        Err(MatrixError::ShapeMismatch { operation, expected: expected.dims(), found: found.dims() })
    }
}

/// Compute the nonzero values of `a * b`, indexed relative to the product.
///
/// Only rows of `a` and columns of `b` that hold a value inside the bounds of the views are
/// visited. For each such pair, the inner indices present in both are found by merging the two
/// sorted index sequences.
fn sparse_product<F: Element>(a: &Matrix<F>, b: &Matrix<F>) -> Vec<SparseTriple<F>> {
    let a_store = a.store.borrow();
    let b_store = b.store.borrow();
    let (a_inner_start, b_inner_start) = (a.column_start, b.row_start);

    let mut products = Vec::new();
    for (&row, a_row) in a_store.major(a.transposed).range(a.row_range()) {
        let a_row = a_row.range(a.column_range())
            .map(move |(&inner, value)| (inner - a_inner_start, value));

        for (&column, b_column) in b_store.minor(b.transposed).range(b.column_range()) {
            let b_column = b_column.range(b.row_range())
                .map(move |(&inner, value)| (inner - b_inner_start, value));

            let mut total = F::zero();
            for pair in a_row.clone().merge_join_by(b_column, |(k, _), (l, _)| k.cmp(l)) {
                if let EitherOrBoth::Both((_, x), (_, y)) = pair {
                    total += &(x.clone() * y);
                }
            }

            if !total.is_zero() {
                products.push((row - a.row_start, column - b.column_start, total));
            }
        }
    }

    products
}
