use std::fmt;

use crate::math::{Orientation, EPSILON};

use super::Point;

/// A closed line segment between two points.
///
/// The Euclidean length is computed once at construction. A zero-length
/// segment (`begin == end`) is allowed; it only contains its single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    begin: Point,
    end: Point,
    length: f64,
}

impl Segment {
    /// Creates a new segment from `begin` to `end`.
    #[must_use]
    pub fn new(begin: Point, end: Point) -> Self {
        Self {
            begin,
            end,
            length: begin.distance(end),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn begin(&self) -> Point {
        self.begin
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the cached Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns `true` if `p` lies on this segment, endpoints included.
    ///
    /// `p` is accepted when `|begin p| + |p end| - length < EPSILON`. The
    /// comparison is one-sided and strict.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        (self.begin.distance(p) + p.distance(self.end)) - self.length < EPSILON
    }

    /// Returns `true` if this segment and `other` share at least one point.
    ///
    /// Handles proper crossings, T-junctions, shared endpoints and collinear
    /// overlaps.
    #[must_use]
    pub fn intersects(&self, other: &Segment) -> bool {
        let o1 = self.begin.orientation(self.end, other.begin);
        let o2 = self.begin.orientation(self.end, other.end);
        let o3 = other.begin.orientation(other.end, self.begin);
        let o4 = other.begin.orientation(other.end, self.end);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && self.contains_point(other.begin))
            || (o2 == Orientation::Collinear && self.contains_point(other.end))
            || (o3 == Orientation::Collinear && other.contains_point(self.begin))
            || (o4 == Orientation::Collinear && other.contains_point(self.end))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.begin, self.end)
    }
}
