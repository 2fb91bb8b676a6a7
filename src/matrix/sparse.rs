//! Sparse matrix backed by an ordered element store

use crate::error::{MatrixError, Result};
use crate::matrix::element::{Element, Scalar};
use crate::matrix::store::ElementStore;

/// A sparse matrix that stores only its non-zero elements
///
/// Elements are kept in a single ordered sequence sorted by row-major
/// position `row * n_cols + col`, compared as the `(row, col)` pair so that
/// dimensions whose product exceeds `usize` still order correctly. The
/// matrix owns every element it holds; values are copied in and out.
///
/// # Examples
///
/// ```
/// use listmat::SparseMatrix;
///
/// let mut m = SparseMatrix::<i32>::new(2, 2);
/// m.set_element(0, 1, 5).unwrap();
/// assert_eq!(m.element_at(0, 1).unwrap(), 5);
/// assert_eq!(m.element_at(1, 1).unwrap(), 0);
/// assert_eq!(m.nnz(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    n_rows: usize,
    n_cols: usize,
    store: ElementStore<T>,
}

impl<T> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self {
            n_rows: 0,
            n_cols: 0,
            store: ElementStore::default(),
        }
    }
}

impl<T> SparseMatrix<T>
where
    T: Scalar,
{
    /// Creates an all-zero matrix with the given dimensions
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            store: ElementStore::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut store = ElementStore::with_capacity(n);
        for i in 0..n {
            store.set(i, i, T::one());
        }

        Self {
            n_rows: n,
            n_cols: n,
            store,
        }
    }

    /// Builds a matrix from parallel arrays of row indices, column indices and values
    ///
    /// Entries go through [`Self::set_element`], so zero values are dropped and a
    /// repeated `(row, col)` keeps the last value given.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the three arrays differ in length, `OutOfBounds`
    /// if any index lies outside `n_rows × n_cols`.
    pub fn from_triplets(
        n_rows: usize,
        n_cols: usize,
        rows: &[usize],
        cols: &[usize],
        values: &[T],
    ) -> Result<Self> {
        if cols.len() != rows.len() {
            return Err(MatrixError::DimensionMismatch {
                expected: rows.len(),
                found: cols.len(),
            });
        }
        if values.len() != rows.len() {
            return Err(MatrixError::DimensionMismatch {
                expected: rows.len(),
                found: values.len(),
            });
        }

        let mut matrix = Self::new(n_rows, n_cols);
        for ((&row, &col), &value) in rows.iter().zip(cols).zip(values) {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Builds a matrix from a dense row-major grid
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the rows are not all the same length.
    pub fn from_dense<R: AsRef<[T]>>(grid: &[R]) -> Result<Self> {
        let n_rows = grid.len();
        let n_cols = grid.first().map_or(0, |row| row.as_ref().len());

        let mut matrix = Self::new(n_rows, n_cols);
        for (i, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(MatrixError::DimensionMismatch {
                    expected: n_cols,
                    found: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                matrix.store.set(i, j, value);
            }
        }
        Ok(matrix)
    }

    /// Builds a matrix from row vectors, same as [`Self::from_dense`]
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the rows are not all the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        Self::from_dense(rows)
    }

    /// Returns the dense equivalent as a vector of rows
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        let mut dense = vec![vec![T::zero(); self.n_cols]; self.n_rows];
        for elem in &self.store {
            dense[elem.row][elem.col] = elem.value;
        }
        dense
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Dimensions as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.store.len()
    }

    /// Returns true if no non-zero element is stored
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterates over the stored elements in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, Element<T>> {
        self.store.iter()
    }

    /// Stored elements as `(row, col, value)` triples in row-major order
    pub fn triplets(&self) -> Vec<(usize, usize, T)> {
        self.store.iter().map(Element::triplet).collect()
    }

    /// Read-only view of the element store
    pub fn store(&self) -> &ElementStore<T> {
        &self.store
    }

    /// Mutable store access for in-crate builders whose indices are already
    /// known to be inside the matrix
    pub(crate) fn store_mut(&mut self) -> &mut ElementStore<T> {
        &mut self.store
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row < self.n_rows && col < self.n_cols {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            })
        }
    }

    /// Returns the value at `(row, col)`, zero if no element is stored there
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `row >= n_rows` or `col >= n_cols`.
    pub fn element_at(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.store.get(row, col))
    }

    /// Sets the value at `(row, col)`
    ///
    /// Setting zero removes the element instead of storing it.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `row >= n_rows` or `col >= n_cols`.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        self.store.set(row, col, value);
        Ok(())
    }

    /// Removes the element at `(row, col)`
    ///
    /// Returns whether an element was stored there. Removing an absent
    /// element is not an error.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `row >= n_rows` or `col >= n_cols`.
    pub fn remove_element(&mut self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.store.remove(row, col))
    }

    /// Grows the matrix to `n_rows × n_cols`
    ///
    /// Every stored element keeps its value at its `(row, col)`. Shrinking
    /// either dimension is refused even when no element would be lost.
    ///
    /// # Errors
    ///
    /// `InvalidResize` if either new dimension is smaller than the current one.
    pub fn resize(&mut self, n_rows: usize, n_cols: usize) -> Result<()> {
        if n_rows < self.n_rows || n_cols < self.n_cols {
            return Err(MatrixError::InvalidResize {
                current: self.shape(),
                requested: (n_rows, n_cols),
            });
        }

        // Relative order of (row, col) pairs is the same for any column
        // count wider than every stored column, so no reorder is needed.
        self.n_rows = n_rows;
        self.n_cols = n_cols;
        Ok(())
    }

    /// Transposes the matrix in place
    ///
    /// Swaps the indices of every element and the dimensions, then restores
    /// row-major order with a merge sort. Transposing twice gives back the
    /// original matrix.
    pub fn transpose(&mut self) {
        self.store.transpose_indices();
        std::mem::swap(&mut self.n_rows, &mut self.n_cols);
        self.store.sort_row_major();
    }

    /// Returns the transpose as a new matrix, leaving `self` untouched
    pub fn transposed(&self) -> Self {
        let mut result = self.clone();
        result.transpose();
        result
    }

    /// Checks that every element lies in bounds, is non-zero and is in order
    pub fn is_consistent(&self) -> bool {
        self.store
            .iter()
            .all(|elem| elem.row < self.n_rows && elem.col < self.n_cols)
            && self.store.is_consistent()
    }
}

impl<'a, T> IntoIterator for &'a SparseMatrix<T> {
    type Item = &'a Element<T>;
    type IntoIter = std::slice::Iter<'a, Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.store).into_iter()
    }
}
