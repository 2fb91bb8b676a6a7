//! Transpose behaviour and ordering after transpose

use listmat::SparseMatrix;

/// Create a tridiagonal matrix
fn create_tridiagonal_matrix(n: usize) -> SparseMatrix<f64> {
    let mut mat = SparseMatrix::new(n, n);
    for i in 0..n {
        if i > 0 {
            mat.set_element(i, i - 1, 1.0).unwrap();
        }
        mat.set_element(i, i, 2.0).unwrap();
        if i < n - 1 {
            mat.set_element(i, i + 1, 3.0).unwrap();
        }
    }
    mat
}

#[test]
fn test_should_transpose_matrix() {
    let mut mat = SparseMatrix::new(2, 2);
    mat.set_element(0, 0, 1.0).unwrap();
    mat.set_element(0, 1, 1.0).unwrap();
    mat.set_element(1, 0, 2.0).unwrap();
    mat.set_element(1, 1, 2.0).unwrap();

    mat.transpose();

    assert_eq!(mat.element_at(0, 0).unwrap(), 1.0);
    assert_eq!(mat.element_at(0, 1).unwrap(), 2.0);
    assert_eq!(mat.element_at(1, 0).unwrap(), 1.0);
    assert_eq!(mat.element_at(1, 1).unwrap(), 2.0);
}

#[test]
fn test_transpose_swaps_dimensions() {
    let mut mat = SparseMatrix::new(2, 5);
    mat.set_element(1, 4, 7).unwrap();
    mat.set_element(0, 3, 1).unwrap();

    mat.transpose();

    assert_eq!(mat.shape(), (5, 2));
    assert_eq!(mat.triplets(), vec![(3, 0, 1), (4, 1, 7)]);
    assert!(mat.is_consistent());
}

#[test]
fn test_transpose_large_tridiagonal() {
    let n = 200;
    let mut mat = create_tridiagonal_matrix(n);
    mat.transpose();

    assert!(mat.is_consistent());
    assert_eq!(mat.nnz(), 3 * n - 2);
    for i in 1..n {
        // Lower band now holds the former upper band
        assert_eq!(mat.element_at(i, i - 1).unwrap(), 3.0);
        assert_eq!(mat.element_at(i - 1, i).unwrap(), 1.0);
    }
}

#[test]
fn test_double_transpose_is_identity() {
    let original = create_tridiagonal_matrix(37);
    let mut mat = original.clone();

    mat.transpose();
    mat.transpose();

    assert_eq!(mat, original);
    assert_eq!(mat.triplets(), original.triplets());
}

#[test]
fn test_transposed_copy_leaves_source() {
    let mat = SparseMatrix::from_dense(&[vec![0, 1], vec![2, 0], vec![0, 3]]).unwrap();
    let t = mat.transposed();

    assert_eq!(mat.shape(), (3, 2));
    assert_eq!(t.to_dense(), vec![vec![0, 2, 0], vec![1, 0, 3]]);
}

#[test]
fn test_set_after_transpose_uses_new_layout() {
    let mut mat = SparseMatrix::new(2, 3);
    mat.set_element(0, 2, 1).unwrap();
    mat.transpose();

    mat.set_element(0, 1, 5).unwrap();
    mat.set_element(2, 1, 6).unwrap();

    assert_eq!(mat.triplets(), vec![(0, 1, 5), (2, 0, 1), (2, 1, 6)]);
    assert!(mat.is_consistent());
}
