//! # Properties on random matrices
//!
//! Laws that should hold for any matrix, checked on sparse matrices drawn from a seeded generator.
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use dualsparse::data::linear_algebra::matrix::Matrix;

const SEED: u64 = 0x5eed;
const ROUNDS: usize = 25;

/// A matrix in which about `density` of the values are nonzero, drawn from `[-5, 5]`.
fn random_matrix(rng: &mut StdRng, rows: usize, columns: usize, density: f64) -> Matrix<i64> {
    let values = (0..rows * columns)
        .map(|_| if rng.gen_bool(density) { rng.gen_range(-5..=5) } else { 0 })
        .collect();

    Matrix::new(rows, columns, values).unwrap()
}

/// Product computed cell by cell.
fn naive_product(a: &Matrix<i64>, b: &Matrix<i64>) -> Matrix<i64> {
    let mut result = Matrix::zeros(a.nr_rows(), b.nr_columns());
    for i in 0..a.nr_rows() {
        for j in 0..b.nr_columns() {
            let value = (0..a.nr_columns())
                .map(|k| a.at(i, k).unwrap() * b.at(k, j).unwrap())
                .sum();
            result.set(i, j, value).unwrap();
        }
    }

    result
}

#[test]
fn identity_is_neutral() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let n = rng.gen_range(1..8);
        let a = random_matrix(&mut rng, n, n, 0.4);

        let mut left = Matrix::zeros(n, n);
        left.mul(&Matrix::identity(n), &a).unwrap();
        assert_eq!(left, a);

        let mut right = Matrix::zeros(n, n);
        right.mul(&a, &Matrix::identity(n)).unwrap();
        assert_eq!(right, a);
    }
}

#[test]
fn product_matches_cell_by_cell() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    for _ in 0..ROUNDS {
        let (m, k, n) = (rng.gen_range(1..6), rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_matrix(&mut rng, m + 2, k + 1, 0.5);
        let b = random_matrix(&mut rng, n + 1, k, 0.5);

        // Operands are views: a slice, and a transposed slice
        let a = a.slice(1, 1, m, k).unwrap();
        let b = b.slice(1, 0, n, k).unwrap().t();

        let mut result = Matrix::zeros(m, n);
        result.mul(&a, &b).unwrap();
        assert_eq!(result, naive_product(&a, &b));
    }
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    for _ in 0..ROUNDS {
        let (rows, columns) = (rng.gen_range(1..7), rng.gen_range(1..7));
        let a = random_matrix(&mut rng, rows, columns, 0.5);

        let back = a.t().t();
        assert!(back.shares_storage(&a));
        assert_eq!(back, a);

        let t = a.t();
        for i in 0..rows {
            for j in 0..columns {
                assert_eq!(t.at(j, i).unwrap(), a.at(i, j).unwrap());
            }
        }
    }
}

#[test]
fn slices_alias_their_parent() {
    let mut rng = StdRng::seed_from_u64(SEED + 3);
    for _ in 0..ROUNDS {
        let (rows, columns) = (rng.gen_range(1..7), rng.gen_range(1..7));
        let mut a = random_matrix(&mut rng, rows, columns, 0.5);

        let (i, j) = (rng.gen_range(0..rows), rng.gen_range(0..columns));
        let (r, c) = (rng.gen_range(1..=rows - i), rng.gen_range(1..=columns - j));
        let mut slice = a.slice(i, j, r, c).unwrap();

        let (di, dj) = (rng.gen_range(0..r), rng.gen_range(0..c));
        let value = rng.gen_range(-9..=9);
        slice.set(di, dj, value).unwrap();
        assert_eq!(a.at(i + di, j + dj).unwrap(), value);

        a.set(i + di, j + dj, value + 1).unwrap();
        assert_eq!(slice.at(di, dj).unwrap(), value + 1);
    }
}

#[test]
fn copies_are_independent() {
    let mut rng = StdRng::seed_from_u64(SEED + 4);
    for _ in 0..ROUNDS {
        let (rows, columns) = (rng.gen_range(1..7), rng.gen_range(1..7));
        let a = random_matrix(&mut rng, rows, columns, 0.5);
        let before = a.copy();

        let mut copy = a.copy();
        assert_eq!(copy, a);
        assert!(!copy.shares_storage(&a));

        copy.negate();
        copy.set(0, 0, 100).unwrap();
        assert_eq!(a, before);
    }
}

#[test]
fn zeroize_range_clears_exactly_its_rectangle() {
    let mut rng = StdRng::seed_from_u64(SEED + 5);
    for _ in 0..ROUNDS {
        let (rows, columns) = (rng.gen_range(1..7), rng.gen_range(1..7));
        let mut a = random_matrix(&mut rng, rows, columns, 0.7);
        let before = a.copy();

        let (i, j) = (rng.gen_range(0..=rows), rng.gen_range(0..=columns));
        let (r, c) = (rng.gen_range(0..=rows - i), rng.gen_range(0..=columns - j));
        a.zeroize_range(i, j, r, c).unwrap();

        for row in 0..rows {
            for column in 0..columns {
                let inside = (i..i + r).contains(&row) && (j..j + c).contains(&column);
                let expected = if inside { 0 } else { before.at(row, column).unwrap() };
                assert_eq!(a.at(row, column).unwrap(), expected);
            }
        }
    }
}

#[test]
fn powers() {
    let mut rng = StdRng::seed_from_u64(SEED + 6);
    for _ in 0..ROUNDS {
        let n = rng.gen_range(1..5);
        let a = random_matrix(&mut rng, n, n, 0.5);

        assert_eq!(a.pow(0).unwrap(), Matrix::identity(n));
        assert_eq!(a.pow(1).unwrap(), a);

        let mut square = Matrix::zeros(n, n);
        square.mul(&a, &a).unwrap();
        assert_eq!(a.pow(2).unwrap(), square);

        let mut cube = Matrix::zeros(n, n);
        cube.mul(&square, &a).unwrap();
        assert_eq!(a.pow(3).unwrap(), cube);

        let mut product = Matrix::zeros(n, n);
        product.mul(&a.pow(2).unwrap(), &a.pow(3).unwrap()).unwrap();
        assert_eq!(a.pow(5).unwrap(), product);
    }
}

#[test]
fn equality_ignores_representation() {
    let mut rng = StdRng::seed_from_u64(SEED + 7);
    for _ in 0..ROUNDS {
        let (rows, columns) = (rng.gen_range(1..7), rng.gen_range(1..7));

        let explicit = Matrix::new(rows, columns, vec![0_i64; rows * columns]).unwrap();
        assert_eq!(explicit, Matrix::zeros(rows, columns));
        assert_ne!(Matrix::<i64>::zeros(rows, columns), Matrix::zeros(rows, columns + 1));

        // Setting and then clearing a value leaves an equal matrix
        let a = random_matrix(&mut rng, rows, columns, 0.5);
        let mut b = a.copy();
        let (i, j) = (rng.gen_range(0..rows), rng.gen_range(0..columns));
        let original = b.at(i, j).unwrap();
        b.set(i, j, 42).unwrap();
        b.set(i, j, original).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), b.size());
    }
}

#[cfg(feature = "serde")]
#[test]
fn json_round_trip() {
    use dualsparse::io::{from_json, to_json};

    let mut rng = StdRng::seed_from_u64(SEED + 8);
    for _ in 0..ROUNDS {
        let (rows, columns) = (rng.gen_range(1..7), rng.gen_range(1..7));
        let a = random_matrix(&mut rng, rows, columns, 0.5);

        let read: Matrix<i64> = from_json(&to_json(&a).unwrap()).unwrap();
        assert_eq!(read, a);
        assert!(!read.shares_storage(&a));
    }
}
