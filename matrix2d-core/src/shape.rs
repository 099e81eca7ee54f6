//! Matrix shape and coordinate mapping
//!
//! Every operation that turns a `(row, column)` pair into a position in the
//! flat row-major storage, or back, goes through [`Shape::offset`] and
//! [`Shape::position`]. These are pure functions with no storage access.

use crate::{MatrixError, Point, Result};

/// Number of rows and columns of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
}

impl Shape {
    /// Create a new shape
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of cells, or `None` if `rows * columns` overflows
    pub const fn checked_len(self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Number of cells
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`.
    pub const fn len(self) -> usize {
        match self.checked_len() {
            Some(len) => len,
            None => panic!("matrix shape overflows usize"),
        }
    }

    /// Whether the shape holds no cells
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Check that a flat sequence of `len` elements fills this shape exactly
    pub const fn validate_len(self, len: usize) -> Result<()> {
        match self.checked_len() {
            Some(expected) if expected == len => Ok(()),
            _ => Err(MatrixError::InvalidMatrixSize),
        }
    }

    /// Whether `(row, column)` lies inside the shape
    pub const fn contains(self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Check a row index
    pub const fn check_row(self, row: usize) -> Result<()> {
        if row < self.rows {
            Ok(())
        } else {
            Err(MatrixError::InvalidIndex)
        }
    }

    /// Check a column index
    pub const fn check_column(self, column: usize) -> Result<()> {
        if column < self.columns {
            Ok(())
        } else {
            Err(MatrixError::InvalidIndex)
        }
    }

    /// Map a coordinate to its offset in row-major storage
    pub const fn offset(self, row: usize, column: usize) -> Result<usize> {
        if !self.contains(row, column) {
            return Err(MatrixError::InvalidIndex);
        }
        Ok(self.columns * row + column)
    }

    /// Map an offset in row-major storage back to its coordinate
    pub const fn position(self, offset: usize) -> Result<Point> {
        // Empty shapes have no valid offsets, so `columns` is never zero below
        let in_range = match self.checked_len() {
            Some(len) => offset < len,
            None => true,
        };
        if !in_range {
            return Err(MatrixError::InvalidIndex);
        }
        Ok(Point::new(offset / self.columns, offset % self.columns))
    }

    /// Offsets of one row, in column order
    ///
    /// Yields nothing when `row` is out of range.
    pub fn row_offsets(self, row: usize) -> impl Iterator<Item = usize> {
        (0..self.columns).filter_map(move |column| self.offset(row, column).ok())
    }

    /// Offsets of one column, in row order (stride = `columns`)
    ///
    /// Yields nothing when `column` is out of range.
    pub fn column_offsets(self, column: usize) -> impl Iterator<Item = usize> {
        (0..self.rows).filter_map(move |row| self.offset(row, column).ok())
    }

    /// The shape with rows and columns exchanged
    pub const fn transposed(self) -> Self {
        Self::new(self.columns, self.rows)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self::new(rows, columns)
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let shape = Shape::new(3, 3);
        let expected = [
            ((0, 0), 0),
            ((0, 1), 1),
            ((0, 2), 2),
            ((1, 0), 3),
            ((1, 1), 4),
            ((1, 2), 5),
            ((2, 0), 6),
            ((2, 1), 7),
            ((2, 2), 8),
        ];
        for ((row, column), offset) in expected {
            assert_eq!(shape.offset(row, column), Ok(offset));
        }
    }

    #[test]
    fn test_position() {
        let shape = Shape::new(3, 3);
        for offset in 0..9 {
            assert_eq!(
                shape.position(offset),
                Ok(Point::new(offset / 3, offset % 3))
            );
        }
    }

    #[test]
    fn test_offset_errors() {
        let shape = Shape::new(3, 3);
        assert_eq!(shape.offset(9, 0), Err(MatrixError::InvalidIndex));
        assert_eq!(shape.offset(1, 8), Err(MatrixError::InvalidIndex));
        assert_eq!(shape.offset(3, 0), Err(MatrixError::InvalidIndex));
        assert_eq!(shape.offset(0, 3), Err(MatrixError::InvalidIndex));
    }

    #[test]
    fn test_position_errors() {
        assert_eq!(Shape::new(3, 3).position(9), Err(MatrixError::InvalidIndex));
        assert_eq!(Shape::new(3, 3).position(11), Err(MatrixError::InvalidIndex));
        // Empty shapes reject every offset instead of dividing by zero
        assert_eq!(Shape::new(4, 0).position(0), Err(MatrixError::InvalidIndex));
        assert_eq!(Shape::new(0, 0).position(0), Err(MatrixError::InvalidIndex));
    }

    #[test]
    fn test_rectangular_round_trip() {
        let shape = Shape::new(2, 5);
        for offset in 0..shape.len() {
            let point = shape.position(offset).unwrap();
            assert_eq!(shape.offset(point.row, point.column), Ok(offset));
        }
        assert_eq!(shape.offset(1, 4), Ok(9));
        assert_eq!(shape.position(7), Ok(Point::new(1, 2)));
    }

    #[test]
    fn test_validate_len() {
        assert_eq!(Shape::new(3, 2).validate_len(6), Ok(()));
        assert_eq!(
            Shape::new(3, 2).validate_len(5),
            Err(MatrixError::InvalidMatrixSize)
        );
        assert_eq!(Shape::new(0, 7).validate_len(0), Ok(()));
        assert_eq!(
            Shape::new(usize::MAX, 2).validate_len(0),
            Err(MatrixError::InvalidMatrixSize)
        );
    }

    #[test]
    fn test_row_and_column_offsets() {
        let shape = Shape::new(3, 4);
        assert!(shape.row_offsets(1).eq([4, 5, 6, 7]));
        assert!(shape.column_offsets(2).eq([2, 6, 10]));
        assert_eq!(shape.row_offsets(3).count(), 0);
        assert_eq!(shape.column_offsets(4).count(), 0);
    }

    #[test]
    fn test_transposed() {
        assert_eq!(Shape::new(2, 5).transposed(), Shape::new(5, 2));
        assert!(Shape::new(0, 5).is_empty());
        assert!(!Shape::new(1, 1).is_empty());
    }
}
