//! Cursor-style point sources
//!
//! Some callers produce coordinates through a stateful cursor that is reset,
//! stepped forward and read, rather than through an [`Iterator`]. This module
//! adapts such cursors to the iterator-based matrix operations.

use log::debug;

use crate::Point;

/// A forward-only, resettable sequence of points
pub trait PointCursor {
    /// Rewind to before the first point
    fn reset(&mut self);

    /// Step to the next point, returning `false` once the sequence is exhausted
    fn advance(&mut self) -> bool;

    /// The point under the cursor
    ///
    /// Only meaningful after [`advance`](Self::advance) returned `true`.
    fn current(&self) -> Point;
}

impl<C: PointCursor + ?Sized> PointCursor for &mut C {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&self) -> Point {
        (**self).current()
    }
}

/// Iterator over a [`PointCursor`], starting from its first point
#[derive(Debug)]
pub struct Cursor<C> {
    inner: C,
}

impl<C: PointCursor> Cursor<C> {
    /// Reset `inner` and wrap it
    pub fn new(mut inner: C) -> Self {
        inner.reset();
        Self { inner }
    }

    /// Unwrap the cursor, leaving it wherever iteration stopped
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: PointCursor> Iterator for Cursor<C> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.inner.advance() {
            Some(self.inner.current())
        } else {
            None
        }
    }
}

/// Walk a cursor from the start and keep every point
///
/// The result can be traversed any number of times, which is what
/// [`Matrix::from_points`](crate::Matrix::from_points) needs.
pub fn collect_points<C: PointCursor + ?Sized>(cursor: &mut C) -> Vec<Point> {
    let points: Vec<Point> = Cursor::new(cursor).collect();
    debug!("collected {} points from cursor", points.len());
    points
}

/// Cursor over a borrowed list of points
#[derive(Debug, Clone)]
pub struct SliceCursor<'a> {
    points: &'a [Point],
    position: usize,
}

impl<'a> SliceCursor<'a> {
    /// Create a cursor positioned before the first point
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            position: 0,
        }
    }
}

impl PointCursor for SliceCursor<'_> {
    fn reset(&mut self) {
        self.position = 0;
    }

    fn advance(&mut self) -> bool {
        if self.position < self.points.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> Point {
        // Before the first advance there is no current point; report the first one
        self.points[self.position.saturating_sub(1)]
    }
}
