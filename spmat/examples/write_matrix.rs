//! Generate two random sparse matrix files that can be multiplied together

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmat::{MatrixFile, SparseMatrix};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    let (m, k, n) = (2_000, 1_500, 1_000);
    let density = 0.002;
    let mut rng = StdRng::seed_from_u64(2024);

    let start = Instant::now();
    let a = random_matrix(&mut rng, m, k, density)?;
    let b = random_matrix(&mut rng, k, n, density)?;
    println!("Built {} and {} matrices in {:?}", a.shape(), b.shape(), start.elapsed());

    let start = Instant::now();
    MatrixFile::save("example_a.txt", &a)?;
    MatrixFile::save("example_b.txt", &b)?;
    println!(
        "Wrote {} + {} non-zeros in {:?}",
        a.nnz(),
        b.nnz(),
        start.elapsed()
    );

    println!("\nRun 'cargo run --example read_matrix' to read them back!");
    Ok(())
}

/// Random integer-valued entries at roughly `density` of all coordinates.
/// The bottom-right corner is always set so the shape survives a reload.
fn random_matrix(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    density: f64,
) -> spmat::Result<SparseMatrix> {
    let nnz = ((rows * cols) as f64 * density) as usize;
    let mut triplets: Vec<(usize, usize, f64)> = (0..nnz)
        .map(|_| {
            let magnitude = f64::from(rng.gen_range(1..=9i32));
            let value = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
            (rng.gen_range(0..rows), rng.gen_range(0..cols), value)
        })
        .collect();
    triplets.push((rows - 1, cols - 1, 1.0));

    Ok(SparseMatrix::from_triplets(rows, cols, triplets)?)
}
