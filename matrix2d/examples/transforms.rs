//! Walk a small matrix through every geometric transform
//!
//! Run with `RUST_LOG=trace cargo run --example transforms` to see the
//! shape changes logged by the library.

use matrix2d::{Matrix, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut matrix = Matrix::new((1..=10).collect::<Vec<i32>>(), 2, 5)?;
    println!("Original ({}):\n{matrix}\n", matrix.shape());

    matrix.transpose();
    println!("Transposed ({}):\n{matrix}\n", matrix.shape());

    matrix.mirror_rows();
    println!("Rows mirrored:\n{matrix}\n");

    matrix.mirror_columns();
    println!("Columns mirrored:\n{matrix}\n");

    let rotated = matrix.rotated();
    println!("Rotated clockwise ({}):\n{rotated}\n", rotated.shape());

    Ok(())
}
