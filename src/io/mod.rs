//! # Writing of sparse vectors and matrices
//!
//! Human readable output, one line per vector or matrix row. Every value is followed by a single
//! space, and every line ends with a newline. A printed matrix is followed by an empty line.
use std::fmt::Display;
use std::io::{self, Write};

use num_traits::PrimInt;

use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::vector::SparseVector;

fn write_line<W: Write, F: Display>(out: &mut W, values: impl IntoIterator<Item=F>) -> io::Result<()> {
    for value in values {
        write!(out, "{} ", value)?;
    }
    writeln!(out)
}

/// Write all values of a vector, including the zeros that aren't stored.
///
/// # Errors
///
/// When writing to `out` fails.
pub fn write_dense<W: Write, F: PrimInt + Display>(out: &mut W, vector: &SparseVector<F>) -> io::Result<()> {
    write_line(out, vector.iter_dense())
}

/// Write the stored values of a vector, without their indices.
///
/// # Errors
///
/// When writing to `out` fails.
pub fn write_stored<W: Write, F: Display>(out: &mut W, vector: &SparseVector<F>) -> io::Result<()> {
    write_line(out, vector.iter().map(|(_, value)| value))
}

/// Write every row of a matrix densely, followed by an empty line.
///
/// # Errors
///
/// When writing to `out` fails.
pub fn write_dense_matrix<W: Write, F: PrimInt + Display>(out: &mut W, matrix: &SparseMatrix<F>) -> io::Result<()> {
    for row in matrix.iter_dense_rows() {
        write_line(out, row)?;
    }
    writeln!(out)
}

/// Write the stored values of every stored row, followed by an empty line.
///
/// Rows that aren't stored are skipped entirely.
///
/// # Errors
///
/// When writing to `out` fails.
pub fn write_stored_matrix<W: Write, F: Display>(out: &mut W, matrix: &SparseMatrix<F>) -> io::Result<()> {
    for (_, row) in matrix.iter_rows() {
        write_stored(out, row)?;
    }
    writeln!(out)
}
