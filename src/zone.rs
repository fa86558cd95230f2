use tracing::debug;

use crate::geometry::{BoundingBox, Polygon};
use crate::operations::query::{BoxPolygonCollision, CollisionParams};

/// A configured keepout area: the polygon plus the parameters every check
/// against it uses.
///
/// The zone is immutable once built and can be shared between streams.
#[derive(Debug, Clone)]
pub struct KeepoutZone {
    polygon: Polygon,
    params: CollisionParams,
}

impl KeepoutZone {
    /// Creates a new zone.
    #[must_use]
    pub fn new(polygon: Polygon, params: CollisionParams) -> Self {
        Self { polygon, params }
    }

    /// Returns the keepout polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Returns the collision parameters.
    #[must_use]
    pub fn params(&self) -> CollisionParams {
        self.params
    }

    /// Returns `true` if a keepout polygon is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.polygon.is_disabled() && !self.polygon.segments().is_empty()
    }

    /// Returns `true` if `bbox` enters the zone. A disabled zone never reports
    /// a collision.
    #[must_use]
    pub fn check(&self, bbox: &BoundingBox) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let hit = BoxPolygonCollision::new(bbox, &self.polygon, self.params).execute();
        debug!(%bbox, hit, mode = ?self.params.mode, "keepout check");
        hit
    }
}
