//! # Sparse integer matrices
//!
//! Matrices in which most values are zero are stored as a sorted list of rows, each row a sorted
//! list of `(column, value)` tuples. Only rows and values that were written are stored, and
//! addition of two matrices merges those lists without ever creating a dense representation.
#![warn(missing_docs)]

pub mod data;
pub mod io;
