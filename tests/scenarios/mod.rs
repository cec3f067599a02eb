//! # Worked examples
//!
//! Small computations of which the result is known exactly, for machine integers and arbitrary
//! precision integers.
use num_bigint::BigInt;

use dualsparse::data::linear_algebra::error::MatrixError;
use dualsparse::data::linear_algebra::matrix::Matrix;
use dualsparse::data::linear_algebra::vector::{TransposedVector, Vector};
use dualsparse::data::number_types::traits::Element;

fn matrix<F: Element + From<i32>>(rows: usize, columns: usize, values: &[i32]) -> Matrix<F> {
    Matrix::new(rows, columns, values.iter().map(|&v| F::from(v)).collect()).unwrap()
}

fn construction<F: Element + From<i32>>() {
    assert_eq!(matrix::<F>(2, 2, &[1, 0, 0, 1]), Matrix::identity(2));
}

#[test]
fn test_construction() {
    construction::<i32>();
    construction::<BigInt>();
}

fn slice_of_identity<F: Element + From<i32>>() {
    let mut expected = Matrix::<F>::zeros(4, 4);
    expected.set(0, 3, F::one()).unwrap();

    assert_eq!(Matrix::<F>::identity(8).slice(3, 0, 4, 4).unwrap(), expected);
}

#[test]
fn test_slice_of_identity() {
    slice_of_identity::<i64>();
    slice_of_identity::<BigInt>();
}

fn inner_product<F: Element + From<i32>>() {
    let a = matrix::<F>(1, 4, &[1, 0, 1, 0]);
    let b = matrix::<F>(1, 4, &[1, 0, 1, 0]);

    let mut result = Matrix::zeros(1, 1);
    result.mul(&a, &b.t()).unwrap();
    assert_eq!(result, matrix(1, 1, &[2]));

    let a = Vector::new(4, (0..4).map(|v| F::from(v % 2)).collect()).unwrap();
    assert_eq!(a.dot(&a).unwrap(), F::from(2));
}

#[test]
fn test_inner_product() {
    inner_product::<i64>();
    inner_product::<BigInt>();
}

fn powers<F: Element + From<i32>>() {
    let a = matrix::<F>(2, 2, &[1, 2, 3, 4]);
    assert_eq!(a.pow(2).unwrap(), matrix(2, 2, &[7, 10, 15, 22]));
    assert_eq!(a.pow(3).unwrap(), matrix(2, 2, &[37, 54, 81, 118]));
}

#[test]
fn test_powers() {
    powers::<i64>();
    powers::<BigInt>();
}

fn zeroize_inside<F: Element + From<i32>>() {
    let mut a = matrix::<F>(4, 4, &[1; 16]);
    a.zeroize_range(1, 1, 2, 2).unwrap();

    assert_eq!(a, matrix(4, 4, &[
        1, 1, 1, 1,
        1, 0, 0, 1,
        1, 0, 0, 1,
        1, 1, 1, 1,
    ]));
}

#[test]
fn test_zeroize_inside() {
    zeroize_inside::<i64>();
    zeroize_inside::<BigInt>();
}

fn transpose_differs<F: Element + From<i32>>() {
    let values = [0, 1, 1, 0, 1, 1, 0, 0, 0];
    assert_ne!(matrix::<F>(3, 3, &values).t(), matrix(3, 3, &values));
}

#[test]
fn test_transpose_differs() {
    transpose_differs::<i64>();
    transpose_differs::<BigInt>();
}

#[test]
fn matrix_times_vector() {
    let m = matrix::<i64>(2, 3, &[1, 0, 2, 0, 3, 0]);

    let mut row = Vector::zeros(3);
    row.mul(&Vector::new(2, vec![1, 1]).unwrap(), &m).unwrap();
    assert_eq!(row, Vector::new(3, vec![1, 3, 2]).unwrap());

    let mut column = TransposedVector::zeros(2);
    column.mul_vec(&m, &TransposedVector::new(3, vec![1, 1, 1]).unwrap()).unwrap();
    assert_eq!(column, TransposedVector::new(2, vec![3, 3]).unwrap());
}

#[test]
fn errors_are_returned() {
    let a = Matrix::<i64>::identity(2);

    assert_eq!(a.at(2, 0), Err(MatrixError::OutOfBounds { index: 2, len: 2 }));
    assert!(matches!(a.slice(0, 0, 0, 1), Err(MatrixError::InvalidArgument(_))));
    assert!(matches!(Matrix::<i64>::zeros(2, 3).pow(2), Err(MatrixError::InvalidArgument(_))));

    let mut result = Matrix::zeros(3, 3);
    assert!(matches!(result.mul(&a, &a), Err(MatrixError::ShapeMismatch { operation: "mul", .. })));

    let mut result = Matrix::<i64>::zeros(2, 2);
    let view = result.t();
    assert_eq!(result.add(&view, &a), Err(MatrixError::SelfAliasing { operation: "add" }));

    let message = Matrix::<i64>::new(2, 2, vec![1]).err().map(|error| error.to_string());
    assert_eq!(message.as_deref(), Some("invalid argument: matrix data length (1) does not match size 2 x 2"));
}

#[test]
fn display() {
    let a = matrix::<BigInt>(2, 2, &[1, 0, -3, 4]);
    assert_eq!(format!("{}", a), "1\t0\n-3\t4\n");
}
