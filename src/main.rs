use listmat::{multiply_with_config, MultiplyConfig, MultiplyStrategy, SparseMatrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("listmat {}: sparse matrices on an ordered element list", listmat::VERSION);

    let a = SparseMatrix::from_dense(&[vec![1, 0, 2], vec![0, 3, 0]])?;
    let b = SparseMatrix::from_dense(&[vec![0, 4], vec![5, 0], vec![0, 6]])?;

    println!("\nMatrix A ({} × {}, nnz = {}):", a.n_rows(), a.n_cols(), a.nnz());
    print!("{}", a);

    println!("\nMatrix B ({} × {}, nnz = {}):", b.n_rows(), b.n_cols(), b.nnz());
    print!("{}", b);

    let config = MultiplyConfig::default();
    println!("\nMultiplying with strategy {:?}", config.strategy);
    let c = multiply_with_config(&a, &b, &config)?;
    print!("{}", c);

    let bucketed = multiply_with_config(
        &a,
        &b,
        &MultiplyConfig::with_strategy(MultiplyStrategy::RowBucketed),
    )?;
    println!("Row-bucketed result matches: {}", bucketed == c);

    let mut t = a.clone();
    t.transpose();
    println!("\nTranspose of A:");
    print!("{}", t);

    if let Err(err) = a.multiply(&a) {
        println!("\nA × A: {}", err);
    }

    Ok(())
}
