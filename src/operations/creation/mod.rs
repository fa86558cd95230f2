mod make_box;
mod make_polygon;

pub use make_box::MakeBox;
pub use make_polygon::MakePolygon;
