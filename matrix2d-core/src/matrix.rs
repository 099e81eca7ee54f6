//! Dense row-major matrix container
//!
//! [`Matrix`] owns one flat vector of cells plus its [`Shape`]. The length of
//! the vector always equals `rows * columns`; operations that change the
//! shape replace both together.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::{Point, Result, Shape};

/// Two-dimensional matrix over an arbitrary element type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "MatrixParts<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Matrix<T> {
    pub(crate) cells: Vec<T>,
    pub(crate) shape: Shape,
}

/// Unvalidated serialized form, checked on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MatrixParts<T> {
    cells: Vec<T>,
    shape: Shape,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<MatrixParts<T>> for Matrix<T> {
    type Error = crate::MatrixError;

    fn try_from(parts: MatrixParts<T>) -> Result<Self> {
        Self::new(parts.cells, parts.shape.rows, parts.shape.columns)
    }
}

impl<T> Matrix<T> {
    /// Create a matrix with every cell set to `T::default()`
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`.
    pub fn zeros(rows: usize, columns: usize) -> Self
    where
        T: Default,
    {
        let shape = Shape::new(rows, columns);
        let mut cells = Vec::with_capacity(shape.len());
        cells.resize_with(shape.len(), T::default);
        Self { cells, shape }
    }

    /// Wrap a flat row-major vector as a `rows x columns` matrix
    ///
    /// The vector is moved into the matrix, not copied. Fails with
    /// [`MatrixError::InvalidMatrixSize`](crate::MatrixError::InvalidMatrixSize)
    /// when its length is not `rows * columns`.
    pub fn new(data: Vec<T>, rows: usize, columns: usize) -> Result<Self> {
        let shape = Shape::new(rows, columns);
        shape.validate_len(data.len())?;
        Ok(Self { cells: data, shape })
    }

    /// Matrix dimensions
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.shape.columns
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the matrix holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Give back the row-major cell vector
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// Read one cell
    pub fn get(&self, row: usize, column: usize) -> Result<&T> {
        let offset = self.shape.offset(row, column)?;
        Ok(&self.cells[offset])
    }

    /// Mutable access to one cell
    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut T> {
        let offset = self.shape.offset(row, column)?;
        Ok(&mut self.cells[offset])
    }

    /// Overwrite one cell; the matrix is untouched on error
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }

    /// Iterate over every cell together with its coordinate, row-major
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        let shape = self.shape;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(offset, cell)| shape.position(offset).ok().map(|p| (p, cell)))
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            shape: Shape::default(),
        }
    }
}

impl<T> Index<Point> for Matrix<T> {
    type Output = T;

    fn index(&self, point: Point) -> &T {
        match self.get(point.row, point.column) {
            Ok(cell) => cell,
            Err(_) => panic!("point {point} out of bounds for {} matrix", self.shape),
        }
    }
}

impl<T> IndexMut<Point> for Matrix<T> {
    fn index_mut(&mut self, point: Point) -> &mut T {
        let shape = self.shape;
        match self.get_mut(point.row, point.column) {
            Ok(cell) => cell,
            Err(_) => panic!("point {point} out of bounds for {shape} matrix"),
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self[Point::new(row, column)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self[Point::new(row, column)]
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (point, cell) in self.indexed_iter() {
            if point.column > 0 {
                write!(f, " ")?;
            } else if point.row > 0 {
                writeln!(f)?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
