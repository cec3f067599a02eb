//! # Serialization of matrices
//!
//! A matrix is written as the two mappings of its storage, followed by the shape and offset of the
//! view. The mappings are written in the orientation of the view: the row values of a transposed
//! matrix are the column values of its storage.
//!
//! Values are written as JSON numbers of any size, through their decimal representation. Machine
//! integers and arbitrary precision integers therefore have the same encoding.
//!
//! Because the whole storage is written, values outside of the view of a slice are included.
//! Reading the record back creates a matrix with its own storage and the same offset, so it reads
//! the same values as the matrix that was written.
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde_json::Number;
use tracing::trace;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::store::{DualIndex, Mapping};

#[derive(Serialize)]
#[serde(rename_all = "camelCase", bound = "F: Display")]
struct RecordRef<'a, F> {
    #[serde(serialize_with = "write_values")]
    row_values: &'a Mapping<F>,
    #[serde(serialize_with = "write_values")]
    col_values: &'a Mapping<F>,
    rows: usize,
    row_start: usize,
    cols: usize,
    col_start: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Record {
    row_values: Mapping<Number>,
    col_values: Mapping<Number>,
    rows: usize,
    row_start: usize,
    cols: usize,
    col_start: usize,
}

/// A single value, written as a number.
struct Cell<'a, F>(&'a F);

impl<F: Display> Serialize for Cell<'_, F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let number = self.0.to_string().parse::<Number>().map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

/// The values of one row or column by their minor index.
struct Cells<'a, F>(&'a BTreeMap<usize, F>);

impl<F: Display> Serialize for Cells<'_, F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(&minor, value)| (minor, Cell(value))))
    }
}

fn write_values<F: Display, S: Serializer>(
    values: &&Mapping<F>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(values.iter().map(|(&major, cells)| (major, Cells(cells))))
}

fn read_values<F, E>(values: Mapping<Number>) -> std::result::Result<Mapping<F>, E>
where
    F: FromStr,
    F::Err: Display,
    E: serde::de::Error,
{
    values.into_iter()
        .map(|(major, cells)| {
            let cells = cells.into_iter()
                .map(|(minor, number)| {
                    let value = number.to_string().parse::<F>()
                        .map_err(|error| E::custom(format!("invalid value {}: {}", number, error)))?;
                    Ok((minor, value))
                })
                .collect::<std::result::Result<BTreeMap<_, _>, E>>()?;
            Ok((major, cells))
        })
        .collect()
}

impl<F: Display> Serialize for Matrix<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let store = self.store.borrow();
        trace!(stored = store.len(), rows = self.rows, columns = self.columns, "serializing matrix");

        let record = RecordRef {
            row_values: store.major(self.transposed),
            col_values: store.minor(self.transposed),
            rows: self.rows,
            row_start: self.row_start,
            cols: self.columns,
            col_start: self.column_start,
        };
        record.serialize(serializer)
    }
}

impl<'de, F> Deserialize<'de> for Matrix<F>
where
    F: FromStr,
    F::Err: Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = Record::deserialize(deserializer)?;
        if record.row_start.checked_add(record.rows).is_none()
            || record.col_start.checked_add(record.cols).is_none() {
            return Err(D::Error::custom("offset and shape of the matrix exceed the index range"));
        }

        let rows = read_values::<F, D::Error>(record.row_values)?;
        let columns = read_values::<F, D::Error>(record.col_values)?;
        Ok(Self {
            store: DualIndex::from_mappings(rows, columns).into_shared(),
            transposed: false,
            rows: record.rows,
            row_start: record.row_start,
            columns: record.cols,
            column_start: record.col_start,
        })
    }
}
