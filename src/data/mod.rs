//! # Storing of sparse data in memory
//!
//! This module provides the data structures used to represent sparse vectors and matrices in
//! memory, together with the errors their operations can produce.

pub mod linear_algebra;
