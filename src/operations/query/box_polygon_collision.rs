use crate::geometry::{BoundingBox, Point, Polygon, Segment};

use super::{CollisionMode, CollisionParams, PointInPolygon, SegmentPolygonIntersect};

/// Decides whether a detection box collides with a keepout polygon.
///
/// Two tests are combined, either of which reports a collision:
///
/// 1. **Containment**: each tested corner is classified by ray casting; a
///    corner inside the polygon or on its boundary collides.
/// 2. **Edge intersection**: each tested box edge is checked against every
///    polygon edge.
///
/// In [`CollisionMode::WholeBox`] all four corners and edges are tested. In
/// [`CollisionMode::BottomEdgeOnly`] only the corners on the bottom row and
/// the bottom edge are.
///
/// A polygon with no edges never collides. A box that strictly encloses the
/// polygon without any edge contact is not reported either.
pub struct BoxPolygonCollision<'a> {
    bbox: &'a BoundingBox,
    polygon: &'a Polygon,
    params: CollisionParams,
}

impl<'a> BoxPolygonCollision<'a> {
    /// Creates a new `BoxPolygonCollision` query.
    #[must_use]
    pub fn new(bbox: &'a BoundingBox, polygon: &'a Polygon, params: CollisionParams) -> Self {
        Self {
            bbox,
            polygon,
            params,
        }
    }

    /// Sets the collision mode.
    #[must_use]
    pub fn with_mode(mut self, mode: CollisionMode) -> Self {
        self.params.mode = mode;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        if self.polygon.segments().is_empty() {
            return false;
        }
        self.any_corner_inside() || self.any_edge_intersects()
    }

    fn tested_points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        match self.params.mode {
            CollisionMode::WholeBox => Box::new(self.bbox.points().iter()),
            CollisionMode::BottomEdgeOnly => Box::new(self.bbox.bottom_points()),
        }
    }

    fn tested_segments(&self) -> Box<dyn Iterator<Item = &Segment> + '_> {
        match self.params.mode {
            CollisionMode::WholeBox => Box::new(self.bbox.segments().iter()),
            CollisionMode::BottomEdgeOnly => Box::new(self.bbox.bottom_segments()),
        }
    }

    fn any_corner_inside(&self) -> bool {
        self.tested_points().any(|&corner| {
            PointInPolygon::new(corner, self.polygon, self.params.max_width)
                .execute()
                .is_inside_or_boundary()
        })
    }

    fn any_edge_intersects(&self) -> bool {
        self.tested_segments()
            .any(|edge| SegmentPolygonIntersect::new(edge, self.polygon).execute())
    }
}

/// Returns `true` if `bbox` collides with `polygon`.
///
/// Shorthand for [`BoxPolygonCollision`] with the given ray extent and mode.
#[must_use]
pub fn box_collides_with_polygon(
    bbox: &BoundingBox,
    polygon: &Polygon,
    max_width: u32,
    mode: CollisionMode,
) -> bool {
    BoxPolygonCollision::new(bbox, polygon, CollisionParams::new(max_width))
        .with_mode(mode)
        .execute()
}
