//! # Sparse matrix
//!
//! Wrapping a `Vec<(usize, SparseVector<_>)>` sorted by row index, fixed size.
use std::fmt;
use std::fmt::Display;
use std::iter::FusedIterator;
use std::mem;

use itertools::{EitherOrBoth, Itertools};
use num_traits::PrimInt;
use tracing::{debug, trace};

use crate::data::linear_algebra::error::{Axis, Error, Result};
use crate::data::linear_algebra::vector::{DenseIter, SparseVector};

/// Uses a `Vec` of (row index, row) tuples as underlying data structure, sorted by row index.
/// Dimensions are fixed at creation.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    rows: Vec<(usize, SparseVector<F>)>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> Sparse<F> {
    /// Create a matrix of dimension `nr_rows` x `nr_columns` without any stored rows.
    #[must_use]
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self { rows: Vec::new(), nr_rows, nr_columns }
    }

    /// Create a matrix from dimensions that might not be valid.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either dimension is negative or doesn't fit in a `usize`.
    pub fn try_new<L: PrimInt + Display>(nr_rows: L, nr_columns: L) -> Result<Self> {
        match (nr_rows.to_usize(), nr_columns.to_usize()) {
            (Some(rows), Some(columns)) => Ok(Self::new(rows, columns)),
            _ => Err(Error::InvalidArgument(format!(
                "matrix dimensions {}x{} are not valid dimensions", nr_rows, nr_columns,
            ))),
        }
    }

    fn check_indices(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.nr_rows {
            Err(Error::IndexOutOfRange { axis: Axis::Row, index: row, len: self.nr_rows })
        } else if column >= self.nr_columns {
            Err(Error::IndexOutOfRange { axis: Axis::Column, index: column, len: self.nr_columns })
        } else {
            Ok(())
        }
    }

    fn check_dimensions(&self, other: &Self) -> Result<()> {
        if (self.nr_rows, self.nr_columns) == (other.nr_rows, other.nr_columns) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: (self.nr_rows, self.nr_columns),
                found: (other.nr_rows, other.nr_columns),
            })
        }
    }

    fn get_row_index(&self, row: usize) -> std::result::Result<usize, usize> {
        self.rows.binary_search_by_key(&row, |&(index, _)| index)
    }

    /// The stored row `i`, if anything was ever written to it.
    pub fn row(&self, i: usize) -> Option<&SparseVector<F>> {
        self.get_row_index(i).ok().map(|index| &self.rows[index].1)
    }

    /// Iterate over the stored rows, by increasing row index.
    pub fn iter_rows(&self) -> impl Iterator<Item=(usize, &SparseVector<F>)> + Clone + '_ {
        self.rows.iter().map(|(i, row)| (*i, row))
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Whether no rows are stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of stored values in this matrix.
    pub fn size(&self) -> usize {
        self.rows.iter()
            .map(|(_, row)| row.size())
            .sum()
    }
}

impl<F: PrimInt> Sparse<F> {
    /// Create a `Sparse` matrix from the provided dense rows.
    ///
    /// Only rows containing a non-zero value are stored, and only their non-zero values.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of equal length. The number of columns of an empty `data` is zero.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if a row is not as long as the first row.
    pub fn from_data(data: Vec<Vec<F>>) -> Result<Self> {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);

        let mut rows = Vec::new();
        for (i, values) in data.into_iter().enumerate() {
            if values.len() != nr_columns {
                return Err(Error::LengthMismatch { expected: nr_columns, found: values.len() });
            }

            let row = values.into_iter().collect::<SparseVector<_>>();
            if row.size() > 0 {
                rows.push((i, row));
            }
        }

        Ok(Self { rows, nr_rows, nr_columns })
    }

    /// Set the value at coordinate (`row`, `column`) to `value`.
    ///
    /// If nothing was stored in row `row` yet, a new row is created and inserted.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row` or `column` is outside of the matrix.
    pub fn set(&mut self, row: usize, column: usize, value: F) -> Result<()> {
        self.check_indices(row, column)?;

        match self.get_row_index(row) {
            Ok(index) => self.rows[index].1.set(column, value),
            Err(index) => {
                trace!(row, position = index, "inserting row");
                let mut new_row = SparseVector::new(self.nr_columns);
                new_row.set(column, value)?;
                self.rows.insert(index, (row, new_row));
                Ok(())
            },
        }
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// # Return value
    ///
    /// The stored value, or zero if nothing is stored there.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row` or `column` is outside of the matrix.
    pub fn get(&self, row: usize, column: usize) -> Result<F> {
        self.check_indices(row, column)?;

        match self.row(row) {
            Some(vector) => vector.get(column),
            None => Ok(F::zero()),
        }
    }

    /// Add another matrix to this one.
    ///
    /// Rows stored in both matrices are added with `SparseVector::add_into`. Rows only stored in
    /// `other` are copied into this matrix at their sorted position; afterwards, this matrix
    /// doesn't share anything with `other`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the shapes differ and `Overflow`, naming the row and column, if a sum
    /// doesn't fit. In both cases, this matrix is unchanged.
    pub fn add_into(&mut self, other: &Self) -> Result<()> {
        self.check_dimensions(other)?;

        if other.rows.is_empty() {
            return Ok(());
        }
        if self.rows.is_empty() {
            debug!(rows = other.rows.len(), "copying all rows of the other matrix");
            self.rows = other.rows.clone();
            return Ok(());
        }

        // Compute all sums of overlapping rows before changing anything
        let sums = self.rows.iter()
            .merge_join_by(&other.rows, |(i, _), (j, _)| i.cmp(j))
            .filter_map(|pair| match pair {
                EitherOrBoth::Both((i, row), (_, other_row)) => Some(
                    row.summed_data(other_row).map_err(|error| match error {
                        Error::Overflow { index, .. } => Error::Overflow { row: Some(*i), index },
                        error => error,
                    })
                ),
                _ => None,
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(merged = sums.len(), rows = other.rows.len(), "adding rows of the other matrix");

        let mut sums = sums.into_iter();
        let old_rows = mem::take(&mut self.rows);
        self.rows = old_rows.into_iter()
            .merge_join_by(&other.rows, |(i, _), (j, _)| i.cmp(j))
            .map(|pair| match pair {
                EitherOrBoth::Both((i, mut row), _) => {
                    if let Some(data) = sums.next() {
                        row.replace_data(data);
                    }
                    (i, row)
                },
                EitherOrBoth::Left(tuple) => tuple,
                EitherOrBoth::Right((j, other_row)) => {
                    trace!(row = j, "copying row");
                    (*j, other_row.clone())
                },
            })
            .collect();
        debug_assert!(sums.next().is_none());

        Ok(())
    }

    /// Iterate over all `nr_rows` rows, each as a dense iterator of `nr_columns` values.
    pub fn iter_dense_rows(&self) -> DenseRows<'_, F> {
        DenseRows { remaining: &self.rows, position: 0, nr_rows: self.nr_rows, nr_columns: self.nr_columns }
    }
}

/// Iterator over all rows of a sparse matrix, including the rows that aren't stored.
#[derive(Debug, Clone)]
pub struct DenseRows<'a, F> {
    /// Stored rows that haven't been reached yet.
    remaining: &'a [(usize, SparseVector<F>)],
    position: usize,
    nr_rows: usize,
    nr_columns: usize,
}

impl<'a, F: PrimInt> Iterator for DenseRows<'a, F> {
    type Item = DenseIter<'a, F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.nr_rows {
            return None;
        }

        let row = match self.remaining.split_first() {
            Some(((index, row), rest)) if *index == self.position => {
                self.remaining = rest;
                row.iter_dense()
            },
            _ => DenseIter::new(&[], self.nr_columns),
        };
        self.position += 1;

        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.nr_rows - self.position;
        (left, Some(left))
    }
}

impl<F: PrimInt> ExactSizeIterator for DenseRows<'_, F> {}

impl<F: PrimInt> FusedIterator for DenseRows<'_, F> {}

impl<F: Display> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}x{}", self.nr_rows, self.nr_columns)?;
        for (i, row) in &self.rows {
            writeln!(f, "{}: {}", i, row)?;
        }
        Ok(())
    }
}
