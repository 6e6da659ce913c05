use anyhow::Result;
use log::LevelFilter;

use rust_matrix_ops::matrix::matrix::Matrix;
use rust_matrix_ops::matrix::matrix_gen::MatrixGen;
use rust_matrix_ops::rings::fraction::Fraction;
use rust_matrix_ops::utils::gcd;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default().filter_or("MATRIX_OPS_LOG", "error,rust_matrix_ops=info,demo=info"),
        )
        .init();

    if let Err(e) = run() {
        log::error!("Demo failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run() -> Result<()> {
    let a = MatrixGen::<i64>::from_list(vec![vec![1, 2], vec![3, 4]])?;
    let b = MatrixGen::<i64>::from_list(vec![vec![5, 6], vec![7, 8]])?;

    log::info!("Running matrix operations on {:?} and {:?} matrices", a.shape(), b.shape());

    println!("Matrix Addition Result:\n{}", (&a + &b)?);
    println!("Matrix Subtraction Result:\n{}", (&a - &b)?);
    println!("Matrix Multiplication Result:\n{}", (&a * &b)?);
    println!("Matrix Division Result:\n{}", (&a / &b)?);
    println!("Matrix Transpose Result:\n{}", a.transpose());

    let inverse = a.inverse()?;
    println!("Matrix Inversion Result:\n{}", inverse);
    println!("Matrix Inversion Result (truncated):\n{}", inverse.truncate_to_int()?);

    log::info!("Running fraction operations");

    let x = Fraction::new(3, 4)?;
    let y = Fraction::new(1, 2)?;

    println!("Fraction Addition Result: {}", x + y);
    println!("Fraction Subtraction Result: {}", x - y);
    println!("Fraction Multiplication Result: {}", x * y);
    println!("Fraction Division Result: {}", (x / y)?);

    let (m, n) = (12, 18);
    println!("GCD of {} and {} is: {}", m, n, gcd(m, n));

    Ok(())
}
