//! Conversions between our sparse matrix and external libraries

use ndarray::{Array2, ArrayView2};
use sprs::CsMat;

use crate::matrix::element::Scalar;
use crate::matrix::sparse::SparseMatrix;

/// Converts our matrix to sprs CsMat in CSR format
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> CsMat<T>
where
    T: Scalar + Default,
{
    let mut indptr = Vec::with_capacity(matrix.n_rows() + 1);
    let mut indices = Vec::with_capacity(matrix.nnz());
    let mut data = Vec::with_capacity(matrix.nnz());

    // Elements are row-major, so each row is one contiguous run
    indptr.push(0);
    let mut elements = matrix.iter().peekable();
    for i in 0..matrix.n_rows() {
        while let Some(elem) = elements.next_if(|elem| elem.row == i) {
            indices.push(elem.col);
            data.push(elem.value);
        }
        indptr.push(indices.len());
    }

    CsMat::new(matrix.shape(), indptr, indices, data)
}

/// Converts a sprs matrix in either CSR or CSC storage to our format
///
/// Explicitly stored zeros in the input are dropped.
pub fn from_sprs<T>(matrix: &CsMat<T>) -> SparseMatrix<T>
where
    T: Scalar,
{
    let (n_rows, n_cols) = matrix.shape();
    let mut result = SparseMatrix::new(n_rows, n_cols);

    let mut triplets: Vec<(usize, usize, T)> = matrix
        .iter()
        .map(|(&value, (row, col))| (row, col, value))
        .collect();
    // CSC storage yields column-major order
    if matrix.is_csc() {
        triplets.sort_by_key(|&(row, col, _)| (row, col));
    }

    // sprs guarantees indices within its own shape
    let store = result.store_mut();
    for (row, col, value) in triplets {
        store.set(row, col, value);
    }
    result
}

/// Converts our matrix to a dense ndarray
pub fn to_ndarray<T>(matrix: &SparseMatrix<T>) -> Array2<T>
where
    T: Scalar,
{
    let mut dense = Array2::from_elem(matrix.shape(), T::zero());
    for elem in matrix {
        dense[[elem.row, elem.col]] = elem.value;
    }
    dense
}

/// Converts a dense ndarray view to our sparse format, skipping zeros
pub fn from_ndarray<T>(dense: &ArrayView2<'_, T>) -> SparseMatrix<T>
where
    T: Scalar,
{
    let (n_rows, n_cols) = dense.dim();
    let mut result = SparseMatrix::new(n_rows, n_cols);
    let store = result.store_mut();
    for ((row, col), &value) in dense.indexed_iter() {
        store.set(row, col, value);
    }
    result
}
