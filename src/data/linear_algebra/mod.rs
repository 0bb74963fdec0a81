//! # Linear algebra primitives
//!
//! Sparse vectors and a sparse matrix built out of them. Values are primitive integers; any value
//! that isn't stored is zero.

pub mod error;
pub mod matrix;
pub mod vector;

/// An index paired with the value stored at that index.
pub type SparseTuple<F> = (usize, F);
