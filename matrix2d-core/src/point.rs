//! Cell coordinates

/// A `(row, column)` coordinate identifying one cell of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

impl Point {
    /// Create a new point
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Largest of the two components
    pub const fn max_component(self) -> usize {
        if self.row > self.column {
            self.row
        } else {
            self.column
        }
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<[usize; 2]> for Point {
    fn from([row, column]: [usize; 2]) -> Self {
        Self::new(row, column)
    }
}

impl From<Point> for (usize, usize) {
    fn from(point: Point) -> Self {
        (point.row, point.column)
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
