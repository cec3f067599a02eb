//! # Dual index
//!
//! The backing storage of a matrix lineage: the same values indexed by row and by column. All
//! writes go through `DualIndex::set` and `DualIndex::remove`, which update both mappings together.
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use num_traits::Zero;

/// Major index to (minor index to value).
///
/// Inner maps are never empty, and the crate never stores a zero value in them.
pub(crate) type Mapping<F> = BTreeMap<usize, BTreeMap<usize, F>>;

/// Storage shared by all views derived from one root matrix.
pub(crate) type Shared<F> = Rc<RefCell<DualIndex<F>>>;

/// Two mappings that mirror each other: `rows[r][c] == columns[c][r]` for every stored value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DualIndex<F> {
    rows: Mapping<F>,
    columns: Mapping<F>,
}

impl<F> DualIndex<F> {
    pub(crate) fn new() -> Self {
        Self { rows: BTreeMap::new(), columns: BTreeMap::new() }
    }

    /// Wrap two mappings without checking that they mirror each other.
    #[cfg(feature = "serde")]
    pub(crate) fn from_mappings(rows: Mapping<F>, columns: Mapping<F>) -> Self {
        Self { rows, columns }
    }

    pub(crate) fn into_shared(self) -> Shared<F> {
        Rc::new(RefCell::new(self))
    }

    /// The mapping that acts as the row index of a view.
    ///
    /// A transposed view uses the column mapping of the store as its rows.
    pub(crate) fn major(&self, transposed: bool) -> &Mapping<F> {
        if transposed { &self.columns } else { &self.rows }
    }

    /// The mapping that acts as the column index of a view.
    pub(crate) fn minor(&self, transposed: bool) -> &Mapping<F> {
        if transposed { &self.rows } else { &self.columns }
    }

    /// Value at a store coordinate, `None` if absent.
    pub(crate) fn get(&self, row: usize, column: usize) -> Option<&F> {
        self.rows.get(&row).and_then(|values| values.get(&column))
    }

    /// Value at the coordinates of a view that is possibly transposed.
    pub(crate) fn get_oriented(&self, transposed: bool, major: usize, minor: usize) -> Option<&F> {
        if transposed {
            self.get(minor, major)
        } else {
            self.get(major, minor)
        }
    }

    /// Delete a value from both mappings, dropping inner maps that become empty.
    pub(crate) fn remove(&mut self, row: usize, column: usize) {
        if Self::remove_from(&mut self.rows, row, column) {
            Self::remove_from(&mut self.columns, column, row);
        }
    }

    /// Remove a value using the coordinates of a view that is possibly transposed.
    pub(crate) fn remove_oriented(&mut self, transposed: bool, major: usize, minor: usize) {
        if transposed {
            self.remove(minor, major);
        } else {
            self.remove(major, minor);
        }
    }

    fn remove_from(mapping: &mut Mapping<F>, major: usize, minor: usize) -> bool {
        let Some(values) = mapping.get_mut(&major) else {
            return false;
        };
        let removed = values.remove(&minor).is_some();
        if values.is_empty() {
            mapping.remove(&major);
        }

        removed
    }

    /// Number of stored values.
    #[cfg(any(test, feature = "serde"))]
    pub(crate) fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Whether the two mappings hold exactly the same values.
    #[cfg(test)]
    pub(crate) fn is_mirrored(&self) -> bool
    where
        F: PartialEq,
    {
        let rows_in_columns = self.rows.iter().all(|(row, values)| {
            !values.is_empty() && values.iter().all(|(column, value)| {
                self.columns.get(column).and_then(|values| values.get(row)) == Some(value)
            })
        });
        let column_count = self.columns.values().map(BTreeMap::len).sum::<usize>();

        rows_in_columns && self.len() == column_count
    }
}

impl<F: Zero + Clone> DualIndex<F> {
    /// Set the value at a store coordinate.
    ///
    /// Setting the zero element deletes the value instead.
    pub(crate) fn set(&mut self, row: usize, column: usize, value: F) {
        if value.is_zero() {
            self.remove(row, column);
            return;
        }

        self.columns.entry(column).or_default().insert(row, value.clone());
        self.rows.entry(row).or_default().insert(column, value);
    }

    /// Set a value using the coordinates of a view that is possibly transposed.
    pub(crate) fn set_oriented(&mut self, transposed: bool, major: usize, minor: usize, value: F) {
        if transposed {
            self.set(minor, major, value);
        } else {
            self.set(major, minor, value);
        }
    }
}
