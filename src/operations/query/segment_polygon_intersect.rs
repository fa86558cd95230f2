use crate::geometry::{Polygon, Segment};

/// Tests whether a segment touches or crosses any edge of a polygon.
///
/// A segment lying strictly inside the polygon does not intersect it.
pub struct SegmentPolygonIntersect<'a> {
    segment: &'a Segment,
    polygon: &'a Polygon,
}

impl<'a> SegmentPolygonIntersect<'a> {
    /// Creates a new `SegmentPolygonIntersect` query.
    #[must_use]
    pub fn new(segment: &'a Segment, polygon: &'a Polygon) -> Self {
        Self { segment, polygon }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.polygon
            .segments()
            .iter()
            .any(|edge| edge.intersects(self.segment))
    }
}
