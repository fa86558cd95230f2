use std::fmt;

use crate::math::{orientation, Orientation, Point2};

/// A location in image space with integer pixel coordinates.
///
/// The origin is the top-left corner of the frame; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point as a floating-point `nalgebra` point.
    #[must_use]
    pub fn to_point2(self) -> Point2 {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        nalgebra::distance(&self.to_point2(), &other.to_point2())
    }

    /// Turn direction from `self -> b` to `b -> c`.
    #[must_use]
    pub fn orientation(self, b: Point, c: Point) -> Orientation {
        orientation(self.into(), b.into(), c.into())
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_3_4_5() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Point::new(-7, 12);
        assert_relative_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn orientation_delegates_to_cross_product() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        assert_eq!(a.orientation(b, Point::new(8, 0)), Orientation::Collinear);
        assert_eq!(a.orientation(b, Point::new(4, -3)), Orientation::Clockwise);
        assert_eq!(
            a.orientation(b, Point::new(4, 3)),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn tuple_conversion() {
        let p: Point = (3, -2).into();
        assert_eq!(p, Point::new(3, -2));
        assert_eq!(<(i32, i32)>::from(p), (3, -2));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(12, -4).to_string(), "(12,-4)");
    }
}
