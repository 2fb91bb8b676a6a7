//! # listmat: sparse matrices on an ordered element list
//!
//! A sparse matrix stores only its non-zero entries. This crate keeps them in
//! a single sequence sorted by row-major position and builds every matrix
//! operation on top of that sequence.
//!
//! ## Components
//!
//! 1. **Element store**: ordered `(row, col, value)` records with positional
//!    lookup, ordered insert and removal. Zero values are never stored.
//!
//! 2. **Merge sort engine**: stable merge sort with an injected key, used to
//!    restore row-major order after a transpose.
//!
//! 3. **Matrix operations**: element access, resize, transpose and text
//!    rendering.
//!
//! 4. **Multiplication**: co-iterates the element streams of both operands
//!    and accumulates partial products by destination cell, without
//!    densifying or mutating either operand.
//!
//! ## Usage
//!
//! ```
//! use listmat::SparseMatrix;
//!
//! let mut a = SparseMatrix::<i32>::new(2, 3);
//! a.set_element(0, 1, 1).unwrap();
//! a.set_element(1, 0, 2).unwrap();
//! a.set_element(1, 2, 3).unwrap();
//!
//! let b = SparseMatrix::from_dense(&[vec![4, 0], vec![0, 6], vec![5, 0]]).unwrap();
//!
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.to_string(), "0 6\n23 0\n");
//! assert_eq!(c.nnz(), 2);
//! ```

pub mod error;
pub mod matrix;
pub mod multiply;
pub mod sort;

// Re-export primary components
pub use error::{MatrixError, Result};
pub use matrix::{Element, ElementStore, Scalar, SparseMatrix};
pub use matrix::{from_ndarray, from_sprs, to_ndarray, to_sprs_csr};
pub use multiply::{multiply, multiply_with_config, MultiplyConfig, MultiplyStrategy};
pub use sort::merge_sort_by_key;

/// Version information for the listmat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
