//! Text rendering of sparse matrices

use std::fmt;

use crate::matrix::element::Scalar;
use crate::matrix::sparse::SparseMatrix;

impl<T> SparseMatrix<T>
where
    T: Scalar + fmt::Display,
{
    /// Writes the dense equivalent of the matrix to `out`
    ///
    /// Cells are separated by a single space and every row ends with a
    /// newline. Unstored cells are written as the zero value. The grid scan
    /// and the element traversal are both row-major, so a single cursor into
    /// the store advances only when it matches the current cell.
    pub fn print<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let mut cursor = self.iter().peekable();
        let zero = T::zero();

        for i in 0..self.n_rows() {
            for j in 0..self.n_cols() {
                if j > 0 {
                    out.write_char(' ')?;
                }
                match cursor.next_if(|elem| elem.is_at(i, j)) {
                    Some(elem) => write!(out, "{}", elem.value)?,
                    None => write!(out, "{}", zero)?,
                }
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl<T> fmt::Display for SparseMatrix<T>
where
    T: Scalar + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_grid() {
        let mut matrix = SparseMatrix::new(2, 3);
        matrix.set_element(0, 0, 1).unwrap();
        matrix.set_element(1, 2, 7).unwrap();

        assert_eq!(matrix.to_string(), "1 0 0\n0 0 7\n");
    }

    #[test]
    fn test_print_tokens_parse_back() {
        let mut matrix = SparseMatrix::new(2, 2);
        matrix.set_element(0, 0, 1.0).unwrap();
        matrix.set_element(0, 1, 1.0).unwrap();
        matrix.set_element(1, 0, 2.0).unwrap();
        matrix.set_element(1, 1, 2.0).unwrap();

        let tokens: Vec<f64> = matrix
            .to_string()
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(tokens, vec![1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_print_degenerate_shapes() {
        assert_eq!(SparseMatrix::<i32>::default().to_string(), "");
        assert_eq!(SparseMatrix::<i32>::new(3, 0).to_string(), "\n\n\n");
    }

    #[test]
    fn test_print_after_transpose() {
        let mut matrix = SparseMatrix::from_dense(&[vec![1, 2, 0], vec![0, 0, 3]]).unwrap();
        matrix.transpose();
        assert_eq!(matrix.to_string(), "1 0\n2 0\n0 3\n");
    }
}
