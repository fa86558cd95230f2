mod bounding_box;
mod point;
mod polygon;
mod segment;

pub use bounding_box::BoundingBox;
pub use point::Point;
pub use polygon::Polygon;
pub use segment::Segment;
