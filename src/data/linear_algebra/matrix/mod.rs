//! # Matrix types
//!
//! A sparse matrix stored as a sorted list of sparse rows. Rows that were never written to aren't
//! stored and contain only zeros.
pub use sparse::{DenseRows, Sparse as SparseMatrix};

mod sparse;
