//! Load the matrices written by `write_matrix`, inspect them and multiply them
//!
//! ```text
//! cargo run --example read_matrix [LEFT] [RIGHT]
//! ```

use spmat::{EngineConfig, MatrixFile, MultiplyStrategy, RowAccess, SparseMatrix};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    let mut args = std::env::args().skip(1);
    let left = args.next().unwrap_or_else(|| "example_a.txt".to_string());
    let right = args.next().unwrap_or_else(|| "example_b.txt".to_string());

    let config = EngineConfig::default().with_mmap(true);

    let start = Instant::now();
    let a: SparseMatrix = MatrixFile::load(&left, &config)?;
    let b: SparseMatrix = MatrixFile::load(&right, &config)?;
    println!("Loaded both matrices in {:?}", start.elapsed());

    for (name, m) in [(&left, &a), (&right, &b)] {
        let density = m.nnz() as f64 / (m.rows() * m.cols()).max(1) as f64;
        println!(
            "{name}: {} with {} non-zeros ({:.4}% dense)",
            m.shape(),
            m.nnz(),
            density * 100.0
        );
    }

    if let Some(&(row, _, _)) = a.sorted_entries().first() {
        let entries = a.get_row(row);
        println!(
            "Row {row} of {left} holds {} entries, first few: {:?}",
            entries.len(),
            &entries[..entries.len().min(5)]
        );
    }

    for strategy in [MultiplyStrategy::RowIndexed, MultiplyStrategy::ColumnScan] {
        let start = Instant::now();
        let product = a.multiply_with(&b, strategy)?;
        println!(
            "{strategy}: {} with {} non-zeros in {:?}",
            product.shape(),
            product.nnz(),
            start.elapsed()
        );
    }

    Ok(())
}
