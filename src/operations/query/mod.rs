mod box_polygon_collision;
mod point_in_polygon;
mod segment_polygon_intersect;

pub use box_polygon_collision::{box_collides_with_polygon, BoxPolygonCollision};
pub use point_in_polygon::{PointClassification, PointInPolygon};
pub use segment_polygon_intersect::SegmentPolygonIntersect;

/// Which part of a detection box is tested against a keepout polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionMode {
    /// All four corners and edges. Suited to overhead cameras.
    #[default]
    WholeBox,
    /// Only the bottom corners and bottom edge, i.e. where the object stands.
    /// Suited to angled cameras, where the top of a box can appear over a zone
    /// the object is not in.
    BottomEdgeOnly,
}

/// Parameters shared by every box/polygon collision test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionParams {
    /// Collision mode.
    pub mode: CollisionMode,
    /// End `x` of the horizontal ray cast from each tested corner.
    ///
    /// Must be at least the largest `x` of the polygon and the box, typically
    /// the frame width, or containment results are meaningless.
    pub max_width: u32,
}

impl CollisionParams {
    /// Creates whole-box parameters casting rays up to `max_width`.
    #[must_use]
    pub fn new(max_width: u32) -> Self {
        Self {
            mode: CollisionMode::default(),
            max_width,
        }
    }

    /// Sets the collision mode.
    #[must_use]
    pub fn with_mode(mut self, mode: CollisionMode) -> Self {
        self.mode = mode;
        self
    }
}
