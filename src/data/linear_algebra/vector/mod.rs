//! # Vector types
//!
//! A fixed-length sparse vector, and a dense view on it that fills in the zeros.
pub use dense::Dense as DenseIter;
pub use sparse::Sparse as SparseVector;

mod dense;
mod sparse;
