use sparse_rows::data::linear_algebra::error::{Axis, Error};
use sparse_rows::data::linear_algebra::matrix::SparseMatrix;
use sparse_rows::data::linear_algebra::vector::SparseVector;
use sparse_rows::io::{write_dense_matrix, write_stored_matrix};

use super::{first_vector, matrix, second_vector, T};

#[test]
fn vector_writes() {
    let vector = first_vector();

    assert_eq!(
        vector.iter().copied().collect::<Vec<_>>(),
        vec![(0, -2), (2, 2), (3, -2), (4, -1), (5, 7), (6, -2)],
    );
    assert_eq!(vector.iter_dense().collect::<Vec<_>>(), vec![-2, 0, 2, -2, -1, 7, -2, 0, 0, 0]);
}

#[test]
fn vector_never_written_is_zero() {
    let vector = first_vector();
    for index in [1, 7, 8, 9] {
        assert_eq!(vector.get(index), Ok(0));
    }
}

#[test]
fn vector_addition() {
    let mut sum = first_vector();
    let second = second_vector();
    sum.add_into(&second).unwrap();

    assert_eq!(sum.get(3), Ok(-4));
    assert_eq!(sum.get(9), Ok(-9));
    for index in 0..sum.len() {
        assert_eq!(
            sum.get(index).unwrap(),
            first_vector().get(index).unwrap() + second.get(index).unwrap(),
        );
    }
}

#[test]
fn vector_idempotent_set() {
    let mut once = first_vector();
    once.set(8, 4).unwrap();
    let mut twice = once.clone();
    twice.set(8, 4).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn matrix_overwrite() {
    let matrix = matrix(&[(3, 6, 5), (3, 9, 5), (3, 6, -1), (3, 6, 3)]);

    assert_eq!(matrix.get(3, 6), Ok(3));
}

#[test]
fn matrix_addition_into_empty() {
    let donor = matrix(&[(0, 6, 33), (3, 6, 3), (3, 9, 5), (1, 2, 3), (9, 2, 19)]);
    let mut sum = SparseMatrix::new(10, 10);
    sum.add_into(&donor).unwrap();

    assert_eq!(sum, donor);
    assert_eq!(
        sum.iter_rows().map(|(row, vector)| (row, vector.iter().copied().collect()))
            .collect::<Vec<(usize, Vec<(usize, T)>)>>(),
        donor.iter_rows().map(|(row, vector)| (row, vector.iter().copied().collect()))
            .collect::<Vec<(usize, Vec<(usize, T)>)>>(),
    );
}

#[test]
fn matrix_addition_output() {
    let writes = [
        (3, 6, 5), (3, 9, 5), (3, 6, -1), (3, 6, 3),
        (1, 2, 3), (2, 2, 3), (3, 2, 3), (4, 2, 3), (5, 2, 3), (8, 2, 7),
    ];
    let mut sum = matrix(&writes);
    let mut other = matrix(&[(0, 6, 33)]);
    for &(row, column, value) in &writes {
        other.set(row, column, value).unwrap();
    }
    other.set(9, 2, 19).unwrap();

    sum.add_into(&other).unwrap();

    let mut out = Vec::new();
    write_stored_matrix(&mut out, &sum).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "33 \n6 \n6 \n6 6 10 \n6 \n6 \n14 \n19 \n\n");

    let mut out = Vec::new();
    write_dense_matrix(&mut out, &sum).unwrap();
    let lines = String::from_utf8(out).unwrap();
    let lines = lines.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[3], "0 0 6 0 0 0 6 0 0 10 ");
    assert_eq!(lines[6], "0 0 0 0 0 0 0 0 0 0 ");
    assert_eq!(lines[10], "");
}

#[test]
fn failures_leave_state_unchanged() {
    let mut vector = first_vector();
    assert_eq!(vector.set(10, 1), Err(Error::IndexOutOfRange { axis: Axis::Index, index: 10, len: 10 }));
    assert_eq!(vector.add_into(&SparseVector::new(3)), Err(Error::LengthMismatch { expected: 10, found: 3 }));
    assert_eq!(vector, first_vector());

    let mut matrix = matrix(&[(1, 1, 1)]);
    let before = matrix.clone();
    assert!(matches!(matrix.set(1, 10, 1), Err(Error::IndexOutOfRange { axis: Axis::Column, .. })));
    assert!(matches!(matrix.add_into(&SparseMatrix::new(10, 9)), Err(Error::DimensionMismatch { .. })));
    assert_eq!(matrix, before);
}

#[test]
fn negative_dimensions() {
    assert!(matches!(SparseVector::<T>::try_new(-3), Err(Error::InvalidArgument(_))));
    assert!(matches!(SparseMatrix::<T>::try_new(-1, 4), Err(Error::InvalidArgument(_))));
}
