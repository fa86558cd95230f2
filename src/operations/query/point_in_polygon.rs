use tracing::trace;

use crate::geometry::{Point, Polygon, Segment};

/// Where a point lies relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    /// On one of the polygon's edges.
    Boundary,
}

impl PointClassification {
    /// Returns `true` for [`Inside`](Self::Inside) and [`Boundary`](Self::Boundary).
    #[must_use]
    pub fn is_inside_or_boundary(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// Classifies a point against a polygon by ray casting.
///
/// A horizontal ray runs from the point to `x = max_width`. If any edge
/// contains the point, it is on the boundary; otherwise an odd number of edges
/// crossed by the ray means the point is inside (even-odd rule).
///
/// An edge only counts when it straddles the ray's row half-open, i.e. exactly
/// one endpoint lies strictly below it (`y > point.y`). A ray through a vertex
/// therefore counts that vertex once, and horizontal edges never count.
pub struct PointInPolygon<'a> {
    point: Point,
    polygon: &'a Polygon,
    max_width: u32,
}

impl<'a> PointInPolygon<'a> {
    /// Creates a new `PointInPolygon` query.
    #[must_use]
    pub fn new(point: Point, polygon: &'a Polygon, max_width: u32) -> Self {
        Self {
            point,
            polygon,
            max_width,
        }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> PointClassification {
        let ray_end = i32::try_from(self.max_width).unwrap_or(i32::MAX);
        let ray = Segment::new(self.point, Point::new(ray_end, self.point.y));

        let mut crossings = 0usize;
        for edge in self.polygon.segments() {
            if edge.contains_point(self.point) {
                return PointClassification::Boundary;
            }
            if straddles(edge, self.point.y) && edge.intersects(&ray) {
                crossings += 1;
            }
        }
        trace!(point = %self.point, crossings, "ray cast");

        if crossings % 2 == 1 {
            PointClassification::Inside
        } else {
            PointClassification::Outside
        }
    }
}

fn straddles(edge: &Segment, y: i32) -> bool {
    (edge.begin().y > y) != (edge.end().y > y)
}
