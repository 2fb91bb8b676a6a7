//! Element records stored by the sparse matrix

use num_traits::Num;
use std::ops::AddAssign;

/// Numeric types that can be stored in a sparse matrix
///
/// The zero value comes from `num_traits::Zero`, which also provides the
/// `is_zero` test used to keep explicit zeros out of the store.
pub trait Scalar: Copy + Num + AddAssign {}

impl<T> Scalar for T where T: Copy + Num + AddAssign {}

/// A single non-zero entry of a sparse matrix
///
/// The position of an element is never stored. Ordering uses the
/// `(row, col)` pair from [`Element::key`], which sorts exactly like the
/// row-major position for any column count above every stored column and
/// cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element<T> {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Stored value, never zero
    pub value: T,
}

impl<T> Element<T> {
    /// Creates a new element record
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Row-major ordering key
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Row-major linear index for a matrix with `n_cols` columns
    ///
    /// Returns `None` when the index does not fit in `usize`, which happens
    /// for very large sparse matrices.
    pub fn position(&self, n_cols: usize) -> Option<usize> {
        self.row.checked_mul(n_cols)?.checked_add(self.col)
    }

    /// Returns true if this element sits at `(row, col)`
    #[inline]
    pub fn is_at(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }

    /// Swaps the row and column indices in place
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.row, &mut self.col);
    }

    /// Returns the element as a `(row, col, value)` triple
    pub fn triplet(&self) -> (usize, usize, T)
    where
        T: Copy,
    {
        (self.row, self.col, self.value)
    }
}
