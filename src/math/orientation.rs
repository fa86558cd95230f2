/// Turn direction of an ordered point triple `a -> b -> c`.
///
/// The sense is taken from the sign of
/// `(b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)`:
/// zero is collinear, positive is clockwise, negative is counter-clockwise.
/// "Clockwise" here is relative to a y-up frame; in image space (y pointing
/// down) the visual sense is mirrored, which does not matter to any
/// intersection test since only equality of orientations is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classifies the turn from `a -> b` to `b -> c`.
///
/// Coordinates are widened to `i128`, so the cross product is exact for every
/// `i32` input.
#[must_use]
pub fn orientation(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Orientation {
    let (ax, ay) = (i128::from(a.0), i128::from(a.1));
    let (bx, by) = (i128::from(b.0), i128::from(b.1));
    let (cx, cy) = (i128::from(c.0), i128::from(c.1));

    let cross = (by - ay) * (cx - bx) - (bx - ax) * (cy - by);
    match cross.signum() {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}
