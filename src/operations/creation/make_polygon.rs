use tracing::{debug, warn};

use crate::geometry::{Point, Polygon};

const OUTLINE_STYLE: &str = "fill:rgb(255,0,0);fill-opacity:0.2;stroke:rgb(255,0,0);stroke-width:3";

/// Creates a keepout polygon from an ordered boundary point list.
pub struct MakePolygon {
    points: Vec<Point>,
    svg_outline: bool,
}

impl MakePolygon {
    /// Creates a new `MakePolygon` operation.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            svg_outline: false,
        }
    }

    /// Attaches an SVG `<polygon>` element tracing the points as the outline.
    #[must_use]
    pub fn with_svg_outline(mut self) -> Self {
        self.svg_outline = true;
        self
    }

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        if self.points.len() < 3 {
            warn!(points = self.points.len(), "keepout polygon is degenerate");
        }

        let mut polygon = Polygon::new(&self.points);
        if self.svg_outline && !self.points.is_empty() {
            polygon.set_outline(svg_outline(&self.points));
        }
        debug!(
            points = polygon.point_count(),
            edges = polygon.segments().len(),
            "built keepout polygon"
        );
        polygon
    }
}

fn svg_outline(points: &[Point]) -> String {
    let coords = points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    format!("<polygon points=\"{coords}\" style=\"{OUTLINE_STYLE}\"/>")
}
