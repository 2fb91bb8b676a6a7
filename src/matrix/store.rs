//! Ordered storage for the non-zero elements of a sparse matrix
//!
//! Elements live in a single vector kept in strictly increasing row-major
//! order. The store orders by the `(row, col)` pair rather than the linear
//! position `row * n_cols + col`: both give the same order while every
//! column is below the column count, and the pair never overflows or goes
//! stale when the column count changes.
//!
//! Bounds checking is the owner's job. The store assumes every
//! `(row, col)` it receives already lies inside the matrix.

use std::ops::Range;

use crate::matrix::element::{Element, Scalar};
use crate::sort::merge_sort_by_key;

/// Sequence of element records sorted by row-major position
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStore<T> {
    elements: Vec<Element<T>>,
}

impl<T> Default for ElementStore<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T> ElementStore<T>
where
    T: Scalar,
{
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if no element is stored
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterates over the elements from lowest to highest position
    pub fn iter(&self) -> std::slice::Iter<'_, Element<T>> {
        self.elements.iter()
    }

    /// Elements as an ordered slice
    pub fn as_slice(&self) -> &[Element<T>] {
        &self.elements
    }

    /// Locates `(row, col)`
    ///
    /// Returns `Ok(index)` if the element is stored, or `Err(index)` with the
    /// slot where it would have to be inserted to keep the order.
    fn locate(&self, row: usize, col: usize) -> Result<usize, usize> {
        self.elements
            .binary_search_by_key(&(row, col), Element::key)
    }

    /// Value at `(row, col)`, or zero if nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> T {
        match self.locate(row, col) {
            Ok(index) => self.elements[index].value,
            Err(_) => T::zero(),
        }
    }

    /// Stores `value` at `(row, col)`
    ///
    /// A zero value removes any existing element instead of being stored.
    /// An existing element is overwritten in place; otherwise the new element
    /// is inserted before the first element that comes after it.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.remove(row, col);
            return;
        }

        // Appending in order is the common case when filling row by row
        let appends = self
            .elements
            .last()
            .map_or(true, |last| last.key() < (row, col));
        if appends {
            self.elements.push(Element::new(row, col, value));
            return;
        }

        match self.locate(row, col) {
            Ok(index) => self.elements[index].value = value,
            Err(index) => self.elements.insert(index, Element::new(row, col, value)),
        }
    }

    /// Removes the element at `(row, col)`, returning whether one was stored
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        match self.locate(row, col) {
            Ok(index) => {
                self.elements.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Index range of the contiguous run of elements in `row`
    ///
    /// The range is empty when the row holds no elements.
    pub fn row_range(&self, row: usize) -> Range<usize> {
        let start = self.elements.partition_point(|elem| elem.row < row);
        let end = start
            + self.elements[start..]
                .iter()
                .take_while(|elem| elem.row == row)
                .count();
        start..end
    }

    /// Swaps row and column of every element
    ///
    /// This leaves the store unsorted; follow with [`Self::sort_row_major`].
    pub(crate) fn transpose_indices(&mut self) {
        for elem in &mut self.elements {
            elem.transpose();
        }
    }

    /// Restores row-major order
    pub fn sort_row_major(&mut self) {
        merge_sort_by_key(&mut self.elements, Element::key);
    }

    /// Checks the ordering and zero-free invariants
    pub fn is_consistent(&self) -> bool {
        self.elements.iter().all(|elem| !elem.value.is_zero())
            && self
                .elements
                .windows(2)
                .all(|pair| pair[0].key() < pair[1].key())
    }
}

impl<'a, T> IntoIterator for &'a ElementStore<T> {
    type Item = &'a Element<T>;
    type IntoIter = std::slice::Iter<'a, Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
