//! # Sparse vector
//!
//! Wrapping a `Vec<(usize, _)>` sorted by index, fixed size.
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;
use std::slice::Iter;

use itertools::{EitherOrBoth, Itertools};
use num_traits::{CheckedAdd, PrimInt};
use tracing::trace;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::error::{Axis, Error, Result};
use crate::data::linear_algebra::vector::DenseIter;

/// A sparse vector using a `Vec` with (index, value) combinations as back-end. Indices start at
/// `0`.
///
/// Every value that was written is stored, also when it is zero. Values that were never written
/// are zero.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    data: Vec<SparseTuple<F>>,
    len: usize,
}

impl<F> Sparse<F> {
    /// Create a vector of length `len` without any stored values.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { data: Vec::new(), len }
    }

    /// Create a vector from a length that might not be a valid length.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `len` is negative or doesn't fit in a `usize`.
    pub fn try_new<L: PrimInt + Display>(len: L) -> Result<Self> {
        match len.to_usize() {
            Some(len) => Ok(Self::new(len)),
            None => Err(Error::InvalidArgument(format!("vector length {} is not a valid length", len))),
        }
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { axis: Axis::Index, index: i, len: self.len })
        }
    }

    fn get_data_index(&self, i: usize) -> std::result::Result<usize, usize> {
        self.data.binary_search_by_key(&i, |&(index, _)| index)
    }

    /// Iterate over the stored (index, value) tuples, by increasing index.
    pub fn iter(&self) -> Iter<'_, SparseTuple<F>> {
        self.data.iter()
    }

    /// The length of this vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this vector has zero length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of stored values.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Replace all stored values.
    ///
    /// Used by the matrix to apply a sum that was computed (and checked) earlier.
    pub(in crate::data::linear_algebra) fn replace_data(&mut self, data: Vec<SparseTuple<F>>) {
        debug_assert!(data.is_sorted_by_key(|&(i, _)| i));
        debug_assert!(data.iter().all(|&(i, _)| i < self.len));

        self.data = data;
    }
}

impl<F: PrimInt> Sparse<F> {
    /// Set the value at index `i` to `value`.
    ///
    /// # Arguments
    ///
    /// * `i`: Index of the value. If nothing is stored there yet, a new tuple will be inserted,
    /// potentially causing many values to be shifted.
    /// * `value`: Value to be taken at index `i`. Zero is stored like any other value.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` is not smaller than the length.
    pub fn set(&mut self, i: usize, value: F) -> Result<()> {
        self.check_index(i)?;

        match self.get_data_index(i) {
            Ok(index) => self.data[index].1 = value,
            Err(index) => {
                trace!(index = i, position = index, "inserting value");
                self.data.insert(index, (i, value));
            },
        }

        Ok(())
    }

    /// Retrieve the value at index `i`.
    ///
    /// # Return value
    ///
    /// The stored value, or zero if nothing is stored at that index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` is not smaller than the length.
    pub fn get(&self, i: usize) -> Result<F> {
        self.check_index(i)?;

        Ok(match self.get_data_index(i) {
            Ok(index) => self.data[index].1,
            Err(_) => F::zero(),
        })
    }

    /// Add another vector to this one.
    ///
    /// Every non-zero value of `other` is added to the value at the same index in this vector,
    /// inserting it if nothing was stored there. Values that become zero stay stored.
    ///
    /// # Arguments
    ///
    /// * `other`: Vector of the same length.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if the lengths differ and `Overflow` if a sum doesn't fit. In both cases,
    /// this vector is unchanged.
    pub fn add_into(&mut self, other: &Self) -> Result<()> {
        let data = self.summed_data(other)?;
        self.data = data;

        Ok(())
    }

    /// Compute the tuples this vector would hold after adding `other` to it.
    pub(in crate::data::linear_algebra) fn summed_data(&self, other: &Self) -> Result<Vec<SparseTuple<F>>> {
        if other.len != self.len {
            return Err(Error::LengthMismatch { expected: self.len, found: other.len });
        }

        let nonzero = other.data.iter().filter(|(_, value)| !value.is_zero());
        self.data.iter()
            .merge_join_by(nonzero, |(i, _), (j, _)| i.cmp(j))
            .map(|pair| match pair {
                EitherOrBoth::Both(&(i, value), (_, other_value)) => CheckedAdd::checked_add(&value, other_value)
                    .map(|sum| (i, sum))
                    .ok_or(Error::Overflow { row: None, index: i }),
                EitherOrBoth::Left(&tuple) | EitherOrBoth::Right(&tuple) => Ok(tuple),
            })
            .collect()
    }

    /// Iterate over all `len` values, including the zeros that aren't stored.
    pub fn iter_dense(&self) -> DenseIter<'_, F> {
        DenseIter::new(&self.data, self.len)
    }
}

impl<'a, F> IntoIterator for &'a Sparse<F> {
    type Item = &'a SparseTuple<F>;
    type IntoIter = Iter<'a, SparseTuple<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<F: PrimInt> FromIterator<F> for Sparse<F> {
    /// Collect dense values; only the non-zero ones get stored.
    fn from_iter<I: IntoIterator<Item=F>>(iter: I) -> Self {
        let mut data = Vec::new();
        let mut counter = 0;

        for item in iter.into_iter() {
            if !item.is_zero() {
                data.push((counter, item));
            }
            counter += 1;
        }

        Self { data, len: counter }
    }
}

impl<F: Display> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (position, (index, value)) in self.data.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({} {})", index, value)?;
        }
        write!(f, "]")
    }
}
