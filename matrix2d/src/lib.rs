//! matrix2d - generic two-dimensional matrix container
//!
//! A dense row-major [`Matrix`] over any element type, with checked access,
//! row/column views, predicate queries, batch mutation and geometric
//! transforms (transpose, mirror, rotate, row shift).
//!
//! ## Architecture
//!
//! - **matrix2d-core**: the `no_std` container and all of its operations
//! - **matrix2d**: re-exports the core and adapts cursor-style point sources
//!
//! ## Quick Start
//!
//! ```rust
//! use matrix2d::{Matrix, Point};
//!
//! fn example() -> matrix2d::Result<()> {
//!     let mut matrix = Matrix::new((1..=9).collect(), 3, 3)?;
//!
//!     matrix.rotate();
//!     assert_eq!(matrix.row_data(0)?, vec![7, 4, 1]);
//!
//!     let even = matrix.filtered(|cell| cell % 2 == 0);
//!     assert_eq!(even[0], Point::new(0, 1));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export the container, its coordinates and error handling
pub use matrix2d_core::{Matrix, MatrixError, Point, Result, Shape};

pub mod cursor;

pub use cursor::{collect_points, Cursor, PointCursor, SliceCursor};
