//! Sparse matrix multiplication by co-iteration of element streams
//!
//! The left operand's elements `(i, k, v)` are visited in row-major order.
//! For each one, the run of right operand elements `(k, j, w)` with row `k`
//! is located and every product `v * w` is added to the sum for `(i, j)`.
//! Neither operand is transposed, densified or otherwise modified.
//!
//! With [`MultiplyStrategy::RowScan`] the run is found by scanning the right
//! operand from its start each time, which costs up to `nnz(A) × nnz(B)`
//! steps but needs no extra memory. [`MultiplyStrategy::RowBucketed`] builds a
//! table of row runs once and jumps straight to each run.

pub mod accumulator;
pub mod config;

use std::ops::Range;

use crate::error::{MatrixError, Result};
use crate::matrix::{Element, Scalar, SparseMatrix};

pub use accumulator::ProductAccumulator;
pub use config::{MultiplyConfig, MultiplyStrategy};

/// Multiplies `a × b` with the default configuration
///
/// # Errors
///
/// `IncompatibleDimensions` if `a.n_cols() != b.n_rows()`.
///
/// # Examples
///
/// ```
/// use listmat::{multiply, SparseMatrix};
///
/// let a = SparseMatrix::from_dense(&[vec![1, 2], vec![0, 3]]).unwrap();
/// let b = SparseMatrix::from_dense(&[vec![4, 5], vec![6, 7]]).unwrap();
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.to_dense(), vec![vec![16, 19], vec![18, 21]]);
/// ```
pub fn multiply<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>>
where
    T: Scalar,
{
    multiply_with_config(a, b, &MultiplyConfig::default())
}

/// Multiplies `a × b` using the strategy selected in `config`
///
/// The result has dimensions `a.n_rows() × b.n_cols()` and never stores a
/// zero, including cells whose partial products cancel out.
///
/// # Errors
///
/// `IncompatibleDimensions` if `a.n_cols() != b.n_rows()`.
pub fn multiply_with_config<T>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &MultiplyConfig,
) -> Result<SparseMatrix<T>>
where
    T: Scalar,
{
    if a.n_cols() != b.n_rows() {
        return Err(MatrixError::IncompatibleDimensions {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let mut result = SparseMatrix::new(a.n_rows(), b.n_cols());
    if a.is_empty() || b.is_empty() {
        return Ok(result);
    }

    let mut acc = ProductAccumulator::with_capacity(a.nnz().max(b.nnz()));
    match config.strategy {
        MultiplyStrategy::RowScan => accumulate_row_scan(a, b, &mut acc),
        MultiplyStrategy::RowBucketed => accumulate_row_bucketed(a, b, &mut acc),
    }

    for (row, col, value) in acc.extract_result() {
        result.set_element(row, col, value)?;
    }
    Ok(result)
}

/// Finds the run of `b_elems` in row `k` by scanning from the start
fn scan_row_run<T>(b_elems: &[Element<T>], k: usize) -> Range<usize> {
    let mut start = 0;
    while start < b_elems.len() && b_elems[start].row < k {
        start += 1;
    }

    let mut end = start;
    while end < b_elems.len() && b_elems[end].row == k {
        end += 1;
    }
    start..end
}

fn accumulate_row_scan<T>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    acc: &mut ProductAccumulator<T>,
) where
    T: Scalar,
{
    let b_elems = b.store().as_slice();

    for a_elem in a {
        let run = scan_row_run(b_elems, a_elem.col);
        for b_elem in &b_elems[run] {
            acc.accumulate(a_elem.row, b_elem.col, a_elem.value * b_elem.value);
        }
    }
}

/// Splits `b_elems` into one run per row in a single pass
fn row_runs<T>(b_elems: &[Element<T>], n_rows: usize) -> Vec<Range<usize>> {
    let mut runs = vec![0..0; n_rows];
    let mut start = 0;

    while start < b_elems.len() {
        let row = b_elems[start].row;
        let mut end = start + 1;
        while end < b_elems.len() && b_elems[end].row == row {
            end += 1;
        }
        runs[row] = start..end;
        start = end;
    }
    runs
}

fn accumulate_row_bucketed<T>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    acc: &mut ProductAccumulator<T>,
) where
    T: Scalar,
{
    let b_elems = b.store().as_slice();
    let runs = row_runs(b_elems, b.n_rows());

    for a_elem in a {
        for b_elem in &b_elems[runs[a_elem.col].clone()] {
            acc.accumulate(a_elem.row, b_elem.col, a_elem.value * b_elem.value);
        }
    }
}

impl<T> SparseMatrix<T>
where
    T: Scalar,
{
    /// Returns `self × other` as a new matrix; both operands are left untouched
    ///
    /// # Errors
    ///
    /// `IncompatibleDimensions` if `self.n_cols() != other.n_rows()`.
    pub fn multiply(&self, other: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        multiply(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both_strategies() -> [MultiplyConfig; 2] {
        [
            MultiplyConfig::with_strategy(MultiplyStrategy::RowScan),
            MultiplyConfig::with_strategy(MultiplyStrategy::RowBucketed),
        ]
    }

    #[test]
    fn test_reference_multiplication() {
        // A = [1 2; 0 3]
        // B = [4 5; 6 7]
        // Expected result: C = A*B = [16 19; 18 21]
        let a = SparseMatrix::from_dense(&[vec![1, 2], vec![0, 3]]).unwrap();
        let b = SparseMatrix::from_dense(&[vec![4, 5], vec![6, 7]]).unwrap();

        for config in both_strategies() {
            let c = multiply_with_config(&a, &b, &config).unwrap();
            assert_eq!(c.shape(), (2, 2));
            assert_eq!(c.nnz(), 4);
            assert_eq!(c.to_dense(), vec![vec![16, 19], vec![18, 21]]);
        }
    }

    #[test]
    fn test_incompatible_dimensions() {
        let a = SparseMatrix::<i32>::new(2, 3);
        let b = SparseMatrix::<i32>::new(2, 2);

        assert_eq!(
            multiply(&a, &b),
            Err(MatrixError::IncompatibleDimensions {
                left: (2, 3),
                right: (2, 2),
            })
        );
    }

    #[test]
    fn test_empty_operand_gives_zero_matrix() {
        let a = SparseMatrix::<i32>::new(2, 3);
        let b = SparseMatrix::<i32>::identity(3);

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (2, 3));
        assert!(c.is_empty());
    }

    #[test]
    fn test_cancellation_leaves_no_stored_zero() {
        // [1 1] × [1; -1] = [0]
        let a = SparseMatrix::from_dense(&[vec![1, 1]]).unwrap();
        let b = SparseMatrix::from_dense(&[vec![1], vec![-1]]).unwrap();

        for config in both_strategies() {
            let c = multiply_with_config(&a, &b, &config).unwrap();
            assert_eq!(c.shape(), (1, 1));
            assert_eq!(c.nnz(), 0);
            assert_eq!(c.element_at(0, 0).unwrap(), 0);
        }
    }

    #[test]
    fn test_scan_row_run() {
        let elems = vec![
            Element::new(0, 1, 1),
            Element::new(2, 0, 2),
            Element::new(2, 2, 3),
            Element::new(3, 1, 4),
        ];

        assert_eq!(scan_row_run(&elems, 0), 0..1);
        assert_eq!(scan_row_run(&elems, 1), 1..1);
        assert_eq!(scan_row_run(&elems, 2), 1..3);
        assert_eq!(scan_row_run(&elems, 4), 4..4);
    }

    #[test]
    fn test_row_runs() {
        let elems = vec![
            Element::new(0, 1, 1),
            Element::new(2, 0, 2),
            Element::new(2, 2, 3),
            Element::new(3, 1, 4),
        ];

        assert_eq!(row_runs(&elems, 5), vec![0..1, 0..0, 1..3, 3..4, 0..0]);
    }

    #[test]
    fn test_method_form() {
        let a = SparseMatrix::<f64>::identity(4);
        let b = SparseMatrix::from_triplets(4, 2, &[0, 3], &[1, 0], &[2.5, -1.0]).unwrap();

        let c = a.multiply(&b).unwrap();
        assert_eq!(c, b);
    }
}
