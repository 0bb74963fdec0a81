//! # Small worked examples
//!
//! Vectors and matrices built with a handful of writes, checked value by value.
use sparse_rows::data::linear_algebra::matrix::SparseMatrix;
use sparse_rows::data::linear_algebra::vector::SparseVector;

/// # Vector and matrix scenarios
mod test;

type T = i32;

/// Length 10, index 3 written twice.
fn first_vector() -> SparseVector<T> {
    let mut vector = SparseVector::new(10);
    for (index, value) in [(3, 5), (2, 2), (5, 7), (4, -1), (3, -2), (6, -2), (0, -2)] {
        vector.set(index, value).unwrap();
    }
    vector
}

/// Like `first_vector`, with an extra value at the last index.
fn second_vector() -> SparseVector<T> {
    let mut vector = first_vector();
    vector.set(9, -9).unwrap();
    vector
}

/// Apply `(row, column, value)` writes to a new 10 x 10 matrix.
fn matrix(writes: &[(usize, usize, T)]) -> SparseMatrix<T> {
    let mut matrix = SparseMatrix::new(10, 10);
    for &(row, column, value) in writes {
        matrix.set(row, column, value).unwrap();
    }
    matrix
}
