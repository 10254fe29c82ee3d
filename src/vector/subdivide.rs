use std::ops::Range;

use crate::{Precision, Vector2D, VectorShape};

/// Largest `count` for which `count + 2` points can still be indexed.
const MAX_COUNT: usize = usize::MAX - 2;

/// The direction a [`Subdivision`] walks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// From the receiver towards the other point.
    #[default]
    Forward,
    /// From the other point back towards the receiver.
    Reverse,
}

/// Iterator over evenly spaced points on a line segment, created by [`Vector2D::subdivide`].
///
/// The iterator holds no hidden state besides its position, so a clone of a fresh
/// [`Subdivision`] can be used to walk the same points again.
#[derive(Debug, Clone)]
pub struct Subdivision {
    start: [f64; 2],
    end: [f64; 2],
    /// Number of segments the line is cut into (`count + 1`).
    segments: usize,
    steps: Range<usize>,
    precision: Precision,
}

impl Subdivision {
    fn point(&self, step: usize) -> Vector2D {
        let elems = if step == 0 {
            self.start
        } else if step == self.segments {
            self.end
        } else {
            let t = step as f64 / self.segments as f64;
            let [x0, y0] = self.start;
            let [x1, y1] = self.end;
            [
                self.precision.round(x0 + (x1 - x0) * t),
                self.precision.round(y0 + (y1 - y0) * t),
            ]
        };
        Vector2D::from_elems(elems, self.precision)
    }
}

impl Iterator for Subdivision {
    type Item = Vector2D;

    fn next(&mut self) -> Option<Vector2D> {
        self.steps.next().map(|step| self.point(step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl DoubleEndedIterator for Subdivision {
    fn next_back(&mut self) -> Option<Vector2D> {
        self.steps.next_back().map(|step| self.point(step))
    }
}

impl ExactSizeIterator for Subdivision {}

impl Vector2D {
    /// Linearly interpolates `count` evenly spaced points between `self` and `other`.
    ///
    /// The interior points sit at `i / (count + 1)` along the segment for `i` in `1..=count`. If
    /// `include_endpoints` is set, `self` and `other` are yielded as well, for `count + 2` points
    /// in total. [`Direction::Reverse`] yields the same points starting from `other`.
    ///
    /// Interpolated coordinates are rounded to the precision of `self`. `count` is clamped to
    /// `usize::MAX - 2`, so the number of points always fits in a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormaster::*;
    /// let a = Vector2D::new(5.0, 10.0);
    /// let b = Vector2D::new(10.0, 20.0);
    /// let points: Vec<_> = a.subdivide(&b, 1, Direction::Forward, true).collect();
    /// assert_eq!(points, [a, Vector2D::new(7.5, 15.0), b]);
    /// ```
    pub fn subdivide(
        &self,
        other: &Vector2D,
        count: usize,
        direction: Direction,
        include_endpoints: bool,
    ) -> Subdivision {
        let (start, end) = match direction {
            Direction::Forward => (self.elems, other.elems),
            Direction::Reverse => (other.elems, self.elems),
        };
        let segments = count.min(MAX_COUNT) + 1;
        let steps = if include_endpoints {
            0..segments + 1
        } else {
            1..segments
        };
        Subdivision {
            start,
            end,
            segments,
            steps,
            precision: self.precision,
        }
    }
}
