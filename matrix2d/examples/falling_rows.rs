//! Stack shapes built from points into a well and clear full rows
//!
//! Uses point-driven construction, point queries, batch writes, row
//! predicates and row removal together.

use matrix2d::{collect_points, Matrix, Point, Result, SliceCursor};

const WIDTH: usize = 4;
const HEIGHT: usize = 5;

fn main() -> Result<()> {
    env_logger::init();

    let mut well = Matrix::<u8>::zeros(HEIGHT, WIDTH);

    // An L piece described by its cells, materialized from a cursor
    let cells = [
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(2, 0),
        Point::new(2, 1),
    ];
    let piece = Matrix::from_points(collect_points(&mut SliceCursor::new(&cells)), 1u8);
    println!("Piece ({}):\n{piece}\n", piece.shape());

    // Drop the piece to the bottom-left corner
    let landing: Vec<Point> = piece
        .filtered(|cell| *cell == 1)
        .into_iter()
        .map(|p| Point::new(p.row + HEIGHT - 3, p.column))
        .collect();
    if well.any_of_points(landing.iter().copied(), |cell| *cell != 0)? {
        println!("Piece collides, stopping");
        return Ok(());
    }
    well.set_batch(1, landing)?;

    // Fill the rest of the bottom row
    well.set_batch(1, [Point::new(HEIGHT - 1, 2), Point::new(HEIGHT - 1, 3)])?;
    println!("Well before clearing:\n{well}\n");

    for row in (0..HEIGHT).rev() {
        while well.all_of_row(row, |cell| *cell != 0)? {
            well.remove_row(row)?;
        }
    }
    println!("Well after clearing:\n{well}");

    Ok(())
}
