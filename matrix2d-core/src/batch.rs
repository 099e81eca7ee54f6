//! Batch mutation, row shifting and point-driven construction

use core::mem;

use log::trace;

use crate::{Matrix, Point, Result, Shape};

impl<T> Matrix<T> {
    /// Set every listed cell to `value`, in the order the points are given
    ///
    /// Stops at the first out-of-range point with
    /// [`MatrixError::InvalidIndex`](crate::MatrixError::InvalidIndex).
    /// Cells written before that point keep their new value.
    pub fn set_batch<I, P>(&mut self, value: T, points: I) -> Result<()>
    where
        T: Clone,
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        for point in points {
            let point = point.into();
            *self.get_mut(point.row, point.column)? = value.clone();
        }
        Ok(())
    }

    /// Move every row down by one
    ///
    /// The last row is discarded and the first row is filled with
    /// `T::default()`. Does nothing on an empty matrix.
    pub fn shift_rows_down(&mut self)
    where
        T: Default,
    {
        if self.shape.is_empty() {
            return;
        }
        self.sink_rows_through(self.cells.len() - 1);
    }

    /// Delete `row`, moving the rows above it down by one
    ///
    /// The shape is unchanged: the first row is refilled with
    /// `T::default()`. Removing the last row is the same as
    /// [`shift_rows_down`](Self::shift_rows_down).
    pub fn remove_row(&mut self, row: usize) -> Result<()>
    where
        T: Default,
    {
        self.shape.check_row(row)?;
        if self.shape.is_empty() {
            return Ok(());
        }
        let last = self.shape.offset(row, self.shape.columns - 1)?;
        self.sink_rows_through(last);
        trace!("removed row {row} of {} matrix", self.shape);
        Ok(())
    }

    /// Copy each cell in `columns..=last` from the cell one row above,
    /// walking backwards so sources are read before they are overwritten,
    /// then default-fill the first row.
    fn sink_rows_through(&mut self, last: usize)
    where
        T: Default,
    {
        let columns = self.shape.columns;
        for offset in (columns..=last).rev() {
            self.cells[offset] = mem::take(&mut self.cells[offset - columns]);
        }
        self.cells[..columns].fill_with(T::default);
    }

    /// Build a square matrix holding `value` at every listed point
    ///
    /// The side is one more than the largest row or column index seen, every
    /// other cell is `T::default()`, and no points give an empty matrix. The
    /// points are walked twice, so the iterator must be `Clone` and yield the
    /// same sequence each time.
    pub fn from_points<I, P>(points: I, value: T) -> Self
    where
        T: Default + Clone,
        I: IntoIterator<Item = P>,
        I::IntoIter: Clone,
        P: Into<Point>,
    {
        let points = points.into_iter();
        let side = points
            .clone()
            .map(|point| Into::<Point>::into(point).max_component() + 1)
            .max()
            .unwrap_or(0);
        Self::filled_at(Shape::new(side, side), points, value)
    }

    /// Like [`from_points`](Self::from_points), but shaped to the tight
    /// bounding box `(max_row + 1) x (max_column + 1)` instead of a square
    pub fn from_points_bounded<I, P>(points: I, value: T) -> Self
    where
        T: Default + Clone,
        I: IntoIterator<Item = P>,
        I::IntoIter: Clone,
        P: Into<Point>,
    {
        let points = points.into_iter();
        let shape = points
            .clone()
            .map(Into::<Point>::into)
            .fold(None, |bounds: Option<Shape>, point| {
                let (rows, columns) = bounds.map_or((0, 0), |s| (s.rows, s.columns));
                Some(Shape::new(
                    rows.max(point.row + 1),
                    columns.max(point.column + 1),
                ))
            })
            .unwrap_or_default();
        Self::filled_at(shape, points, value)
    }

    fn filled_at<I, P>(shape: Shape, points: I, value: T) -> Self
    where
        T: Default + Clone,
        I: Iterator<Item = P>,
        P: Into<Point>,
    {
        let mut matrix = Self::zeros(shape.rows, shape.columns);
        for point in points {
            let point = point.into();
            if let Ok(cell) = matrix.get_mut(point.row, point.column) {
                *cell = value.clone();
            }
        }
        trace!("built {shape} matrix from points");
        matrix
    }
}
