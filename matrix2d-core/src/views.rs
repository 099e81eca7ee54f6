//! Row/column views and predicate queries

use alloc::vec::Vec;

use crate::{Matrix, Point, Result};

impl<T> Matrix<T> {
    /// Borrow one row as a contiguous slice
    pub fn row(&self, row: usize) -> Result<&[T]> {
        self.shape.check_row(row)?;
        if self.shape.columns == 0 {
            return Ok(&[]);
        }
        let start = self.shape.offset(row, 0)?;
        let end = self.shape.offset(row, self.shape.columns - 1)?;
        Ok(&self.cells[start..=end])
    }

    /// Iterate over one column, top to bottom
    pub fn column(&self, column: usize) -> Result<impl Iterator<Item = &T> + '_> {
        self.shape.check_column(column)?;
        Ok(self
            .shape
            .column_offsets(column)
            .map(move |offset| &self.cells[offset]))
    }

    /// Copy of one row, in column order
    pub fn row_data(&self, row: usize) -> Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(self.row(row)?.to_vec())
    }

    /// Copy of one column, in row order
    pub fn column_data(&self, column: usize) -> Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(self.column(column)?.cloned().collect())
    }

    /// Whether every cell of `row` satisfies `predicate`
    pub fn all_of_row<F>(&self, row: usize, predicate: F) -> Result<bool>
    where
        F: FnMut(&T) -> bool,
    {
        Ok(self.row(row)?.iter().all(predicate))
    }

    /// Whether every cell of `column` satisfies `predicate`
    pub fn all_of_column<F>(&self, column: usize, predicate: F) -> Result<bool>
    where
        F: FnMut(&T) -> bool,
    {
        Ok(self.column(column)?.all(predicate))
    }

    /// Whether any of the given cells satisfies `predicate`
    ///
    /// Points are visited in order and bounds are checked as each one is
    /// reached. The search stops at the first match, so an out-of-range point
    /// after a match is never reported.
    pub fn any_of_points<I, P, F>(&self, points: I, mut predicate: F) -> Result<bool>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
        F: FnMut(&T) -> bool,
    {
        for point in points {
            let point = point.into();
            if predicate(self.get(point.row, point.column)?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Coordinates of every cell satisfying `predicate`, in row-major order
    pub fn filtered<F>(&self, mut predicate: F) -> Vec<Point>
    where
        F: FnMut(&T) -> bool,
    {
        self.indexed_iter()
            .filter(|&(_, cell)| predicate(cell))
            .map(|(point, _)| point)
            .collect()
    }
}
