//! Geometric transforms: transpose, mirror and rotate

use alloc::vec::Vec;
use core::mem;

use log::trace;

use crate::Matrix;

impl<T> Matrix<T> {
    /// Consume the matrix and return its transpose
    ///
    /// Cells are gathered in column-major scan order, so an `r x c` matrix
    /// becomes `c x r` with `after[(i, j)] == before[(j, i)]`.
    pub fn transposed(self) -> Self
    where
        T: Default,
    {
        let Self { mut cells, shape } = self;
        let mut gathered = Vec::with_capacity(cells.len());
        for column in 0..shape.columns {
            for offset in shape.column_offsets(column) {
                gathered.push(mem::take(&mut cells[offset]));
            }
        }
        trace!("transposed {shape} matrix");
        Self {
            cells: gathered,
            shape: shape.transposed(),
        }
    }

    /// Transpose in place, swapping the row and column counts
    pub fn transpose(&mut self)
    where
        T: Default,
    {
        *self = mem::take(self).transposed();
    }

    /// Reverse the order of the rows
    pub fn mirror_rows(&mut self) {
        let rows = self.shape.rows;
        for top in 0..rows / 2 {
            let bottom = rows - 1 - top;
            let pairs = self
                .shape
                .row_offsets(top)
                .zip(self.shape.row_offsets(bottom));
            for (upper, lower) in pairs {
                self.cells.swap(upper, lower);
            }
        }
    }

    /// Reverse the order of the columns
    pub fn mirror_columns(&mut self) {
        let columns = self.shape.columns;
        for left in 0..columns / 2 {
            let right = columns - 1 - left;
            let pairs = self
                .shape
                .column_offsets(left)
                .zip(self.shape.column_offsets(right));
            for (a, b) in pairs {
                self.cells.swap(a, b);
            }
        }
    }

    /// Consume the matrix and return it rotated 90 degrees clockwise
    pub fn rotated(self) -> Self
    where
        T: Default,
    {
        let mut rotated = self.transposed();
        rotated.mirror_columns();
        rotated
    }

    /// Rotate 90 degrees clockwise in place
    pub fn rotate(&mut self)
    where
        T: Default,
    {
        *self = mem::take(self).rotated();
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix, Shape};
    use alloc::vec;

    fn square() -> Matrix<i32> {
        Matrix::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 3).unwrap()
    }

    fn two_by_five() -> Matrix<i32> {
        Matrix::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 2, 5).unwrap()
    }

    #[test]
    fn test_transpose_square() {
        let mut m = square();
        m.transpose();
        assert_eq!(m.as_slice(), &[1, 4, 7, 2, 5, 8, 3, 6, 9]);
        assert_eq!(m.shape(), Shape::new(3, 3));
    }

    #[test]
    fn test_transpose_rect() {
        let mut m = two_by_five();
        m.transpose();
        assert_eq!(
            m.as_slice(),
            &[
                1, 6, //
                2, 7, //
                3, 8, //
                4, 9, //
                5, 10,
            ]
        );
        assert_eq!(m.shape(), Shape::new(5, 2));
    }

    #[test]
    fn test_transposed_consumes() {
        let t = two_by_five().transposed();
        assert_eq!(t.get(4, 1), Ok(&10));
        assert_eq!(t.get(0, 1), Ok(&6));
        assert_eq!(t.transposed(), two_by_five());
    }

    #[test]
    fn test_mirror_rows_3x3() {
        let mut m = square();
        m.mirror_rows();
        assert_eq!(m.as_slice(), &[7, 8, 9, 4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_mirror_rows_4x3() {
        let mut m = Matrix::new((1..=12).collect(), 4, 3).unwrap();
        m.mirror_rows();
        assert_eq!(
            m.as_slice(),
            &[
                10, 11, 12, //
                7, 8, 9, //
                4, 5, 6, //
                1, 2, 3,
            ]
        );
    }

    #[test]
    fn test_mirror_columns_3x3() {
        let mut m = square();
        m.mirror_columns();
        assert_eq!(m.as_slice(), &[3, 2, 1, 6, 5, 4, 9, 8, 7]);
    }

    #[test]
    fn test_mirror_columns_3x6() {
        let mut m = Matrix::new((1..=18).collect(), 3, 6).unwrap();
        m.mirror_columns();
        assert_eq!(
            m.as_slice(),
            &[
                6, 5, 4, 3, 2, 1, //
                12, 11, 10, 9, 8, 7, //
                18, 17, 16, 15, 14, 13,
            ]
        );
    }

    #[test]
    fn test_rotate_3x3() {
        let mut m = square();
        m.rotate();
        assert_eq!(m.as_slice(), &[7, 4, 1, 8, 5, 2, 9, 6, 3]);
    }

    #[test]
    fn test_rotate_2x5() {
        let mut m = two_by_five();
        m.rotate();
        assert_eq!(
            m.as_slice(),
            &[
                6, 1, //
                7, 2, //
                8, 3, //
                9, 4, //
                10, 5,
            ]
        );
        assert_eq!(m.shape(), Shape::new(5, 2));
    }

    #[test]
    fn test_four_rotations_restore() {
        let m = two_by_five();
        let back = m.clone().rotated().rotated().rotated().rotated();
        assert_eq!(back, m);
    }

    #[test]
    fn test_transforms_on_empty() {
        let mut m = Matrix::<i32>::zeros(0, 4);
        m.mirror_rows();
        m.mirror_columns();
        m.transpose();
        assert_eq!(m.shape(), Shape::new(4, 0));
        m.rotate();
        assert_eq!(m.shape(), Shape::new(0, 4));
    }
}
