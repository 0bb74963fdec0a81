//! # Errors of sparse vector and matrix operations
//!
//! All operations check their arguments before changing anything, so when one of these errors is
//! returned, the operands are exactly as they were before the call.
use std::fmt;

use thiserror::Error;

/// Simplified `Result` using [`Error`] as error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error variants of construction, access and arithmetic.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// An index, row or column is not smaller than the corresponding dimension.
    #[error("{axis} {index} is out of range for dimension {len}")]
    IndexOutOfRange {
        /// What kind of index was requested.
        axis: Axis,
        /// The index that was requested.
        index: usize,
        /// The dimension it was checked against.
        len: usize,
    },
    /// Two vectors that should have the same length don't.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Length of the vector being operated on.
        expected: usize,
        /// Length of the other operand.
        found: usize,
    },
    /// Two matrices that should have the same shape don't.
    #[error(
        "dimension mismatch: expected {}x{}, found {}x{}",
        .expected.0, .expected.1, .found.0, .found.1
    )]
    DimensionMismatch {
        /// `(rows, columns)` of the matrix being operated on.
        expected: (usize, usize),
        /// `(rows, columns)` of the other operand.
        found: (usize, usize),
    },
    /// A dimension given at construction can't be used, for example because it is negative.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The sum of two values doesn't fit in the value type.
    #[error(
        "overflow while adding values at index {index}{}",
        .row.map_or_else(String::new, |row| format!(" of row {row}")),
    )]
    Overflow {
        /// Row of the value that overflowed, when adding matrices.
        row: Option<usize>,
        /// Index of the value that overflowed within its vector or row.
        index: usize,
    },
}

/// The dimension an index was checked against.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    /// Position in a vector.
    Index,
    /// Row of a matrix.
    Row,
    /// Column of a matrix.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Index => "index",
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::error::{Axis, Error};

    #[test]
    fn messages() {
        let error = Error::IndexOutOfRange { axis: Axis::Column, index: 7, len: 3 };
        assert_eq!(error.to_string(), "column 7 is out of range for dimension 3");
        let error = Error::Overflow { row: None, index: 2 };
        assert_eq!(error.to_string(), "overflow while adding values at index 2");
        let error = Error::Overflow { row: Some(4), index: 0 };
        assert_eq!(error.to_string(), "overflow while adding values at index 0 of row 4");
    }
}
