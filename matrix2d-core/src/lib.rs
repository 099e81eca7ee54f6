#![no_std]

//! matrix2d core - dense two-dimensional matrix container
//!
//! This crate provides a generic row-major [`Matrix`] with checked element
//! access, row/column views, predicate queries, batch mutation and in-place
//! geometric transforms. It needs `alloc` but not `std`.
//!
//! All coordinate arithmetic lives in [`Shape`]; the other modules only call
//! [`Shape::offset`] and [`Shape::position`].

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod point;
pub mod shape;

mod batch;
mod transform;
mod views;

pub use error::*;
pub use matrix::Matrix;
pub use point::Point;
pub use shape::Shape;
