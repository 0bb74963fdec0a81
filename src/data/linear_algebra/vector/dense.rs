//! # Dense view
//!
//! Walks a slice of sorted sparse tuples position by position, such that it looks like a `Vec` of
//! fixed size.
use std::iter::FusedIterator;

use num_traits::Zero;

use crate::data::linear_algebra::SparseTuple;

/// Iterator over all values of a sparse vector, including the zeros that aren't stored.
///
/// Cloning it, or asking the vector for a new one, restarts the iteration.
#[derive(Debug, Clone)]
pub struct Dense<'a, F> {
    /// Stored tuples that haven't been reached yet.
    remaining: &'a [SparseTuple<F>],
    position: usize,
    len: usize,
}

impl<'a, F> Dense<'a, F> {
    /// Create a dense view.
    ///
    /// # Arguments
    ///
    /// * `data`: Tuples sorted by index, all indices smaller than `len`.
    /// * `len`: Number of values the iterator produces.
    pub(crate) fn new(data: &'a [SparseTuple<F>], len: usize) -> Self {
        debug_assert!(data.is_sorted_by_key(|&(i, _)| i));
        debug_assert!(data.iter().all(|&(i, _)| i < len));

        Self { remaining: data, position: 0, len }
    }
}

impl<F: Zero + Copy> Iterator for Dense<'_, F> {
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.len {
            return None;
        }

        let value = match self.remaining.split_first() {
            Some((&(index, value), rest)) if index == self.position => {
                self.remaining = rest;
                value
            },
            _ => F::zero(),
        };
        self.position += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.position;
        (left, Some(left))
    }
}

impl<F: Zero + Copy> ExactSizeIterator for Dense<'_, F> {}

impl<F: Zero + Copy> FusedIterator for Dense<'_, F> {}
