use super::{Point, Segment};

/// A simple closed polygon stored as its boundary edges.
///
/// Edge order is the closing edge (last point back to the first) followed by
/// the edges between consecutive points. Only iteration order depends on it.
///
/// The polygon also carries an optional outline descriptor for the overlay
/// renderer. A polygon without one is the "no keepout configured" sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    segments: Vec<Segment>,
    point_count: usize,
    outline: Option<String>,
}

impl Polygon {
    /// Builds a polygon from an ordered boundary point list.
    ///
    /// Fewer than three points are accepted and produce a degenerate shape;
    /// an empty list produces a polygon with no edges.
    #[must_use]
    pub fn new(points: &[Point]) -> Self {
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return Self::default();
        };

        let mut segments = Vec::with_capacity(points.len());
        segments.push(Segment::new(last, first));
        segments.extend(points.windows(2).map(|w| Segment::new(w[0], w[1])));

        Self {
            segments,
            point_count: points.len(),
            outline: None,
        }
    }

    /// The "no keepout configured" sentinel: no edges and no outline.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Returns the boundary edges.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of boundary points the polygon was built from.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Returns `true` if the polygon was built from fewer than three points.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.point_count < 3
    }

    /// Returns the renderer outline, if one has been set.
    #[must_use]
    pub fn outline(&self) -> Option<&str> {
        self.outline.as_deref()
    }

    /// Sets the renderer outline.
    pub fn set_outline(&mut self, outline: impl Into<String>) {
        self.outline = Some(outline.into());
    }

    /// Returns `true` while no outline is set.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.outline.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn closing_edge_comes_first() {
        let poly = Polygon::new(&[p(0, 0), p(0, 10), p(10, 10), p(10, 0)]);
        let segs = poly.segments();
        assert_eq!(segs.len(), 4);
        assert_eq!((segs[0].begin(), segs[0].end()), (p(10, 0), p(0, 0)));
        assert_eq!((segs[1].begin(), segs[1].end()), (p(0, 0), p(0, 10)));
        assert_eq!((segs[2].begin(), segs[2].end()), (p(0, 10), p(10, 10)));
        assert_eq!((segs[3].begin(), segs[3].end()), (p(10, 10), p(10, 0)));
    }

    #[test]
    fn every_point_touches_two_edges() {
        let pts = [p(0, 0), p(6, -2), p(9, 4), p(3, 8), p(-1, 5)];
        let poly = Polygon::new(&pts);
        for pt in pts {
            let touching = poly
                .segments()
                .iter()
                .filter(|s| s.begin() == pt || s.end() == pt)
                .count();
            assert_eq!(touching, 2, "{pt}");
        }
        assert!(!poly.is_degenerate());
    }

    #[test]
    fn empty_point_list_has_no_edges() {
        let poly = Polygon::new(&[]);
        assert!(poly.segments().is_empty());
        assert_eq!(poly.point_count(), 0);
        assert!(poly.is_degenerate());
    }

    #[test]
    fn single_point_yields_zero_length_edge() {
        let poly = Polygon::new(&[p(3, 4)]);
        assert_eq!(poly.segments().len(), 1);
        assert!(poly.segments()[0].length().abs() < f64::EPSILON);
        assert!(poly.is_degenerate());
    }

    #[test]
    fn two_points_yield_doubled_edge() {
        let poly = Polygon::new(&[p(0, 0), p(5, 0)]);
        assert_eq!(poly.segments().len(), 2);
        assert!(poly.is_degenerate());
    }

    #[test]
    fn outline_defaults_to_disabled() {
        let mut poly = Polygon::new(&[p(0, 0), p(0, 10), p(10, 10)]);
        assert!(poly.is_disabled());
        assert_eq!(poly.outline(), None);

        poly.set_outline("<polygon points=\"0,0 0,10 10,10\"/>");
        assert!(!poly.is_disabled());
        assert_eq!(poly.outline(), Some("<polygon points=\"0,0 0,10 10,10\"/>"));
    }

    #[test]
    fn disabled_sentinel() {
        let poly = Polygon::disabled();
        assert!(poly.is_disabled());
        assert!(poly.segments().is_empty());
    }
}
