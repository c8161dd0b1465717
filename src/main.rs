use matmult::harness::{Algorithm, BenchConfig};
use matmult::matrix::Matrix;

fn main() {
    env_logger::init();

    // One visible run before the timing loops, to show the multipliers agree.
    let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]);
    let b = Matrix::identity(2);
    println!("Matrix A:\n{a}");
    println!("Matrix B:\n{b}");
    match a.multiply(&b) {
        Ok(c) => println!("Resulting Matrix C (classical):\n{c}"),
        Err(err) => eprintln!("classical demo failed: {err}"),
    }
    match a.strassen_multiply(&b) {
        Ok(c) => println!("Resulting Matrix C (Strassen):\n{c}"),
        Err(err) => eprintln!("Strassen demo failed: {err}"),
    }

    BenchConfig::powers_of_two(Algorithm::Classical, 11).run();
    BenchConfig::powers_of_two(Algorithm::Strassen, 9).run();

    println!("Done");
}
