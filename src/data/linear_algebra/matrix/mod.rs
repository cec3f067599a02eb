//! # Matrix views
//!
//! A `Matrix` is a window of a given shape at a given offset onto a dual index that may be shared
//! with other matrices. Slicing, transposing and taking a row or column never copies values: the
//! result is connected to the matrix it was taken from, and changes to one cause changes in the
//! other where they overlap. Only `Matrix::copy` (and the constructors) create new storage.
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use itertools::Itertools;

use crate::data::linear_algebra::SparseTriple;
use crate::data::linear_algebra::error::{MatrixError, Result};
use crate::data::linear_algebra::store::{DualIndex, Shared};
use crate::data::linear_algebra::vector::{TransposedVector, Vector};
use crate::data::number_types::traits::Element;

mod ops;
#[cfg(feature = "serde")]
mod encoding;

/// A sparse matrix, possibly connected to other matrices through shared storage.
///
/// Indices are relative to the view and start at `0`. Values that are not stored are zero.
pub struct Matrix<F> {
    store: Shared<F>,
    /// Whether the rows of this view are the columns of the store.
    transposed: bool,
    rows: usize,
    row_start: usize,
    columns: usize,
    column_start: usize,
}

impl<F: Element> Matrix<F> {
    /// Create a matrix from values listed row by row.
    ///
    /// # Arguments
    ///
    /// * `rows`: Number of rows.
    /// * `columns`: Number of columns.
    /// * `values`: Either empty, for a matrix of zeros, or exactly `rows * columns` values in
    /// row-major order. Zero values are not stored.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the number of values doesn't match the shape.
    pub fn new(rows: usize, columns: usize, values: Vec<F>) -> Result<Self> {
        if !values.is_empty() && rows.checked_mul(columns) != Some(values.len()) {
            return Err(MatrixError::InvalidArgument(format!(
                "matrix data length ({}) does not match size {} x {}",
                values.len(), rows, columns,
            )));
        }

        let mut store = DualIndex::new();
        for (index, value) in values.into_iter().enumerate() {
            store.set(index / columns, index % columns, value);
        }

        Ok(Self::root(store, rows, columns))
    }

    /// Create a matrix of zeros of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::root(DualIndex::new(), rows, columns)
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut store = DualIndex::new();
        for i in 0..len {
            store.set(i, i, F::one());
        }

        Self::root(store, len, len)
    }

    /// Create a new matrix with the same values, that is not connected to this one.
    pub fn copy(&self) -> Self {
        let mut store = DualIndex::new();
        for (i, j, value) in self.nonzero_values() {
            store.set(i, j, value);
        }

        Self::root(store, self.rows, self.columns)
    }

    /// Copy a row vector into a new `1 x len` matrix.
    pub fn from_vector(vector: &Vector<F>) -> Self {
        vector.as_matrix().copy()
    }

    /// Copy a column vector into a new `len x 1` matrix.
    pub fn from_transposed_vector(vector: &TransposedVector<F>) -> Self {
        vector.as_matrix().copy()
    }

    /// Get the value at coordinate (`i`, `j`).
    ///
    /// # Return value
    ///
    /// The stored value, or zero if nothing is stored at that coordinate.
    pub fn at(&self, i: usize, j: usize) -> Result<F> {
        self.check_row(i)?;
        self.check_column(j)?;

        let value = self.store.borrow()
            .get_oriented(self.transposed, self.row_start + i, self.column_start + j)
            .cloned();
        Ok(value.unwrap_or_else(F::zero))
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    ///
    /// Setting zero removes the value from the storage.
    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<()> {
        self.check_row(i)?;
        self.check_column(j)?;

        self.store.borrow_mut()
            .set_oriented(self.transposed, self.row_start + i, self.column_start + j, value);
        Ok(())
    }

    /// Set all values in this matrix to zero.
    ///
    /// Values of a shared storage outside of this view are not touched.
    pub fn zeroize(&mut self) {
        self.zeroize_region(self.row_range(), self.column_range());
    }

    /// Set all values in a sub-rectangle of this matrix to zero.
    ///
    /// # Arguments
    ///
    /// * `i`, `j`: Top left corner of the region.
    /// * `rows`, `columns`: Size of the region, may be zero.
    pub fn zeroize_range(&mut self, i: usize, j: usize, rows: usize, columns: usize) -> Result<()> {
        check_extent(i, rows, self.rows)?;
        check_extent(j, columns, self.columns)?;

        let (row, column) = (self.row_start + i, self.column_start + j);
        self.zeroize_region(row..row + rows, column..column + columns);
        Ok(())
    }

    /// Replace a region of this matrix with the values of another matrix.
    ///
    /// The region has the shape of `source` and its top left corner at (`i_offset`, `j_offset`).
    /// It is cleared first, values of this matrix outside of it are kept.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `source` does not fit at the offset.
    pub fn set_matrix(&mut self, source: &Self, i_offset: usize, j_offset: usize) -> Result<()> {
        let rows_fit = i_offset.checked_add(source.rows).is_some_and(|end| end <= self.rows);
        let columns_fit = j_offset.checked_add(source.columns).is_some_and(|end| end <= self.columns);
        if !rows_fit || !columns_fit {
            return Err(MatrixError::ShapeMismatch {
                operation: "set_matrix",
                expected: self.dims(),
                found: (i_offset.saturating_add(source.rows), j_offset.saturating_add(source.columns)),
            });
        }

        self.overwrite(
            self.row_start + i_offset, self.column_start + j_offset,
            source.rows, source.columns,
            source.nonzero_values(),
        );
        Ok(())
    }

    /// Create a matrix connected to a sub-rectangle of this one.
    ///
    /// # Arguments
    ///
    /// * `i`, `j`: Top left corner of the slice in this matrix.
    /// * `rows`, `columns`: Shape of the slice, both need to be positive.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty slice, `OutOfBounds` if the slice doesn't fit in this
    /// matrix.
    pub fn slice(&self, i: usize, j: usize, rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(MatrixError::InvalidArgument(format!(
                "slice rows and columns must be at least 1, got {} x {}", rows, columns,
            )));
        }
        self.check_row(i)?;
        self.check_column(j)?;
        check_extent(i, rows, self.rows)?;
        check_extent(j, columns, self.columns)?;

        Ok(self.window(self.row_start + i, self.column_start + j, rows, columns))
    }

    /// The transpose of this matrix, connected to it.
    pub fn t(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            transposed: !self.transposed,
            rows: self.columns,
            row_start: self.column_start,
            columns: self.rows,
            column_start: self.row_start,
        }
    }

    /// Row `i` as a vector connected to this matrix.
    pub fn row(&self, i: usize) -> Result<Vector<F>> {
        self.check_row(i)?;

        Ok(Vector::wrap(self.window(self.row_start + i, self.column_start, 1, self.columns)))
    }

    /// Column `j` as a vector connected to this matrix.
    pub fn column(&self, j: usize) -> Result<TransposedVector<F>> {
        self.check_column(j)?;

        Ok(TransposedVector::wrap(self.window(self.row_start, self.column_start + j, self.rows, 1)))
    }

    /// Replace the values of row `i` with those of `vector`.
    ///
    /// The length of `vector` must equal the number of columns of this matrix.
    pub fn set_row(&mut self, i: usize, vector: &Vector<F>) -> Result<()> {
        self.check_row(i)?;
        if vector.len() != self.columns {
            return Err(MatrixError::ShapeMismatch {
                operation: "set_row",
                expected: (1, self.columns),
                found: (1, vector.len()),
            });
        }

        let values = vector.as_matrix().nonzero_values();
        self.overwrite(self.row_start + i, self.column_start, 1, self.columns, values);
        Ok(())
    }

    /// Replace the values of column `j` with those of `vector`.
    ///
    /// The length of `vector` must equal the number of rows of this matrix.
    pub fn set_column(&mut self, j: usize, vector: &TransposedVector<F>) -> Result<()> {
        self.check_column(j)?;
        if vector.len() != self.rows {
            return Err(MatrixError::ShapeMismatch {
                operation: "set_column",
                expected: (self.rows, 1),
                found: (vector.len(), 1),
            });
        }

        let values = vector.as_matrix().nonzero_values();
        self.overwrite(self.row_start, self.column_start + j, self.rows, 1, values);
        Ok(())
    }

    /// All nonzero values in this matrix, ordered by row and then by column.
    pub fn nonzero_values(&self) -> Vec<SparseTriple<F>> {
        self.region_values(self.row_range(), self.column_range())
    }

    /// Number of nonzero values in this matrix.
    pub fn size(&self) -> usize {
        self.nonzero_values().len()
    }

    /// Values inside a region of the view frame, indexed relative to the corner of the region.
    fn region_values(&self, rows: Range<usize>, columns: Range<usize>) -> Vec<SparseTriple<F>> {
        let (row_offset, column_offset) = (rows.start, columns.start);
        let store = self.store.borrow();

        let values = store.major(self.transposed)
            .range(rows)
            .flat_map(|(&row, values)| {
                values.range(columns.clone())
                    .map(move |(&column, value)| (row - row_offset, column - column_offset, value))
            })
            .filter(|(_, _, value)| !value.is_zero())
            .map(|(i, j, value)| (i, j, value.clone()))
            .collect();
        values
    }

    /// Clear a region, given in the view frame, and write `values` relative to its corner.
    ///
    /// The values are owned, so they have been read before anything is written. This keeps the
    /// write correct when they came from a view that shares this storage.
    pub(crate) fn overwrite(
        &mut self,
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
        values: Vec<SparseTriple<F>>,
    ) {
        debug_assert!(values.iter().all(|&(i, j, _)| i < rows && j < columns));

        self.zeroize_region(row..row + rows, column..column + columns);
        let mut store = self.store.borrow_mut();
        for (i, j, value) in values {
            store.set_oriented(self.transposed, row + i, column + j, value);
        }
    }
}

impl<F> Matrix<F> {
    fn root(store: DualIndex<F>, rows: usize, columns: usize) -> Self {
        Self {
            store: store.into_shared(),
            transposed: false,
            rows,
            row_start: 0,
            columns,
            column_start: 0,
        }
    }

    /// A view with the same storage and orientation, at an offset in the view frame.
    fn window(&self, row_start: usize, column_start: usize, rows: usize, columns: usize) -> Self {
        Self {
            store: Rc::clone(&self.store),
            transposed: self.transposed,
            rows,
            row_start,
            columns,
            column_start,
        }
    }

    /// The dimensions of this matrix as `(rows, columns)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.columns
    }

    /// Whether this matrix and `other` are views onto the same storage.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    /// Whether writing to this matrix can change what `other` sees.
    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        fn intersect(left: &Range<usize>, right: &Range<usize>) -> bool {
            left.start.max(right.start) < left.end.min(right.end)
        }

        if !self.shares_storage(other) {
            return false;
        }
        let (rows, columns) = self.store_region();
        let (other_rows, other_columns) = other.store_region();

        intersect(&rows, &other_rows) && intersect(&columns, &other_columns)
    }

    /// The rows and columns of the store that this view can see.
    fn store_region(&self) -> (Range<usize>, Range<usize>) {
        if self.transposed {
            (self.column_range(), self.row_range())
        } else {
            (self.row_range(), self.column_range())
        }
    }

    fn row_range(&self) -> Range<usize> {
        self.row_start..self.row_start + self.rows
    }

    fn column_range(&self) -> Range<usize> {
        self.column_start..self.column_start + self.columns
    }

    fn check_row(&self, i: usize) -> Result<()> {
        if i < self.rows {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds { index: i, len: self.rows })
        }
    }

    fn check_column(&self, j: usize) -> Result<()> {
        if j < self.columns {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds { index: j, len: self.columns })
        }
    }

    /// Delete all stored values inside a region of the view frame.
    fn zeroize_region(&mut self, rows: Range<usize>, columns: Range<usize>) {
        let store = self.store.borrow();
        let coordinates = store.major(self.transposed)
            .range(rows)
            .flat_map(|(&row, values)| values.range(columns.clone()).map(move |(&column, _)| (row, column)))
            .collect::<Vec<_>>();
        drop(store);

        let mut store = self.store.borrow_mut();
        for (row, column) in coordinates {
            store.remove_oriented(self.transposed, row, column);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool
    where
        F: PartialEq,
    {
        self.store.borrow().is_mirrored()
    }
}

/// Check that a range of `extent` indices starting at `start` fits in a dimension of size `len`.
///
/// The reported index is the last one of the range, or the one before `start` for an empty range.
pub(crate) fn check_extent(start: usize, extent: usize, len: usize) -> Result<()> {
    match start.checked_add(extent) {
        Some(end) if end <= len => Ok(()),
        _ => {
            let last = match extent {
                0 => start.saturating_sub(1),
                _ => start.saturating_add(extent - 1),
            };
            Err(MatrixError::OutOfBounds { index: last, len })
        },
    }
}

impl<F: Element> PartialEq for Matrix<F> {
    /// Shapes need to be equal, values that are not stored count as zero.
    fn eq(&self, other: &Self) -> bool {
        if self.dims() != other.dims() {
            return false;
        }
        if self.shares_storage(other) && self.store_region() == other.store_region()
            && self.transposed == other.transposed {
            return true;
        }

        self.nonzero_values() == other.nonzero_values()
    }
}

impl<F: Element> Eq for Matrix<F> {
}

impl<F: Element> fmt::Debug for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("values", &self.nonzero_values())
            .finish()
    }
}

impl<F: Element> fmt::Display for Matrix<F> {
    /// One line per row, values separated by tabs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.nonzero_values().into_iter().peekable();
        for i in 0..self.rows {
            let line = (0..self.columns)
                .map(|j| match values.next_if(|&(row, column, _)| (row, column) == (i, j)) {
                    Some((_, _, value)) => value.to_string(),
                    None => F::zero().to_string(),
                })
                .join("\t");
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
