pub mod boundary;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod zone;

pub use boundary::{load_keepout_polygon, parse_boundary};
pub use error::{KeepoutError, Result};
pub use geometry::{BoundingBox, Point, Polygon, Segment};
pub use operations::query::{box_collides_with_polygon, CollisionMode, CollisionParams};
pub use zone::KeepoutZone;
