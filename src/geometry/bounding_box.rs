use std::fmt;

use super::{Point, Segment};

/// An axis-aligned detection box in image space.
///
/// Corners are normalized so that the box is a proper rectangle regardless of
/// which diagonal the input corners describe. Points are stored as top-left,
/// bottom-left, top-right, bottom-right; edges as left, bottom, right, top.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    points: [Point; 4],
    segments: [Segment; 4],
    bottom_y: i32,
}

impl BoundingBox {
    /// Creates a box from two opposite corners `(x1, y1)` and `(x2, y2)`.
    #[must_use]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (left, right) = (x1.min(x2), x1.max(x2));
        let (top, bottom) = (y1.min(y2), y1.max(y2));

        let top_left = Point::new(left, top);
        let bottom_left = Point::new(left, bottom);
        let top_right = Point::new(right, top);
        let bottom_right = Point::new(right, bottom);

        Self {
            points: [top_left, bottom_left, top_right, bottom_right],
            segments: [
                Segment::new(top_left, bottom_left),
                Segment::new(bottom_left, bottom_right),
                Segment::new(bottom_right, top_right),
                Segment::new(top_right, top_left),
            ],
            bottom_y: bottom,
        }
    }

    /// Creates a box from two opposite corner points.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Returns the four corners: top-left, bottom-left, top-right, bottom-right.
    #[must_use]
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// Returns the four edges: left, bottom, right, top.
    #[must_use]
    pub fn segments(&self) -> &[Segment; 4] {
        &self.segments
    }

    /// Returns the largest `y` of the box (its visually lowest row).
    #[must_use]
    pub fn bottom_y(&self) -> i32 {
        self.bottom_y
    }

    /// Returns the corners lying on the bottom row.
    pub fn bottom_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|p| p.y == self.bottom_y)
    }

    /// Returns the edges whose endpoints both lie on the bottom row.
    pub fn bottom_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|s| s.begin().y == self.bottom_y && s.end().y == self.bottom_y)
    }

    /// Returns `true` if any edge of the box intersects `segment`.
    #[must_use]
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        self.segments.iter().any(|edge| edge.intersects(segment))
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = &self.segments;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}
