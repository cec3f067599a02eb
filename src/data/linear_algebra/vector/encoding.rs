//! # Serialization of vectors
//!
//! A vector is written as `{"mat": <matrix>}`. Reading one back checks that the matrix has the
//! shape of the vector type.
use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as _;
use serde::ser::SerializeStruct;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::{TransposedVector, Vector};

#[derive(Deserialize)]
#[serde(bound(deserialize = "Matrix<F>: Deserialize<'de>"))]
struct Encoded<F> {
    mat: Matrix<F>,
}

fn write<F: Display, S: Serializer>(
    name: &'static str,
    matrix: &Matrix<F>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct(name, 1)?;
    state.serialize_field("mat", matrix)?;
    state.end()
}

impl<F: Display> Serialize for Vector<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        write("Vector", self.as_matrix(), serializer)
    }
}

impl<F: Display> Serialize for TransposedVector<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        write("TransposedVector", self.as_matrix(), serializer)
    }
}

impl<'de, F> Deserialize<'de> for Vector<F>
where
    Matrix<F>: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let Encoded { mat } = Encoded::deserialize(deserializer)?;
        if mat.nr_rows() != 1 {
            return Err(D::Error::custom(format!(
                "a row vector has exactly one row, got a {} x {} matrix", mat.nr_rows(), mat.nr_columns(),
            )));
        }

        Ok(Self::wrap(mat))
    }
}

impl<'de, F> Deserialize<'de> for TransposedVector<F>
where
    Matrix<F>: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let Encoded { mat } = Encoded::deserialize(deserializer)?;
        if mat.nr_columns() != 1 {
            return Err(D::Error::custom(format!(
                "a column vector has exactly one column, got a {} x {} matrix", mat.nr_rows(), mat.nr_columns(),
            )));
        }

        Ok(Self::wrap(mat))
    }
}
