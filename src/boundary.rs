//! Keepout boundary files.
//!
//! A boundary file is a small CSV document: the first line is a header and is
//! ignored, every following line holds one `x,y` boundary point in pixel
//! coordinates. Points are taken in file order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{BoundaryError, KeepoutError, Result};
use crate::geometry::{Point, Polygon};
use crate::operations::creation::MakePolygon;

/// Parses boundary points from `reader`, skipping the header line.
///
/// Blank lines are ignored. Surrounding whitespace around each coordinate is
/// allowed.
///
/// # Errors
///
/// Returns `BoundaryError::Io` if reading fails, `BoundaryError::MalformedLine`
/// if a line is not a pair of comma-separated fields, and
/// `BoundaryError::InvalidCoordinate` if a field is not an integer.
pub fn parse_boundary<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(BoundaryError::from)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        points.push(parse_line(idx + 1, trimmed)?);
    }
    Ok(points)
}

fn parse_line(line: usize, content: &str) -> Result<Point> {
    let mut fields = content.split(',');
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(BoundaryError::MalformedLine {
            line,
            content: content.to_owned(),
        }
        .into());
    };
    Ok(Point::new(parse_coord(line, x)?, parse_coord(line, y)?))
}

fn parse_coord(line: usize, field: &str) -> Result<i32> {
    let field = field.trim();
    field.parse::<i32>().map_err(|_| {
        BoundaryError::InvalidCoordinate {
            line,
            value: field.to_owned(),
        }
        .into()
    })
}

/// Loads the keepout polygon from a boundary file.
///
/// Never fails: a missing, unreadable, malformed or empty file yields
/// [`Polygon::disabled`]. A loaded polygon carries an SVG outline.
#[must_use]
pub fn load_keepout_polygon(path: impl AsRef<Path>) -> Polygon {
    let path = path.as_ref();
    let points = match File::open(path)
        .map_err(|e| KeepoutError::from(BoundaryError::Io(e)))
        .and_then(|file| parse_boundary(BufReader::new(file)))
    {
        Ok(points) => points,
        Err(err) => {
            warn!(path = %path.display(), %err, "keepout disabled");
            return Polygon::disabled();
        }
    };

    if points.is_empty() {
        warn!(path = %path.display(), "boundary file has no points, keepout disabled");
        return Polygon::disabled();
    }
    debug!(path = %path.display(), points = points.len(), "loaded keepout boundary");

    MakePolygon::new(points).with_svg_outline().execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    #[test]
    fn skips_header_and_keeps_order() {
        let input = "x,y\n10,20\n30,40\n 50 , 60 \n";
        let points = parse_boundary(Cursor::new(input)).unwrap();
        assert_eq!(
            points,
            vec![Point::new(10, 20), Point::new(30, 40), Point::new(50, 60)]
        );
    }

    #[test]
    fn header_is_skipped_even_if_numeric() {
        let points = parse_boundary(Cursor::new("1,1\n2,2\n")).unwrap();
        assert_eq!(points, vec![Point::new(2, 2)]);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let points = parse_boundary(Cursor::new("x,y\n\n1,2\n\n3,4")).unwrap();
        assert_eq!(points, vec![Point::new(1, 2), Point::new(3, 4)]);
    }

    #[test]
    fn header_only_yields_no_points() {
        assert!(parse_boundary(Cursor::new("x,y\n")).unwrap().is_empty());
        assert!(parse_boundary(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let err = parse_boundary(Cursor::new("x,y\n1,2\n3\n")).unwrap_err();
        assert!(matches!(
            err,
            KeepoutError::Boundary(BoundaryError::MalformedLine { line: 3, .. })
        ));

        let err = parse_boundary(Cursor::new("x,y\n1,2,3\n")).unwrap_err();
        assert!(matches!(
            err,
            KeepoutError::Boundary(BoundaryError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn invalid_coordinate_is_rejected() {
        let err = parse_boundary(Cursor::new("x,y\n1,abc\n")).unwrap_err();
        match err {
            KeepoutError::Boundary(BoundaryError::InvalidCoordinate { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_disabled() {
        let poly = load_keepout_polygon("/nonexistent/keepout_points.csv");
        assert!(poly.is_disabled());
        assert!(poly.segments().is_empty());
    }

    #[test]
    fn loads_polygon_with_outline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y\n0,0\n0,10\n10,10\n10,0").unwrap();

        let poly = load_keepout_polygon(file.path());
        assert!(!poly.is_disabled());
        assert_eq!(poly.point_count(), 4);
        assert_eq!(poly.segments().len(), 4);
        assert!(poly.outline().unwrap().contains("0,0 0,10 10,10 10,0"));
    }

    #[test]
    fn malformed_file_is_disabled() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y\n0,0\nbogus").unwrap();
        assert!(load_keepout_polygon(file.path()).is_disabled());
    }

    #[test]
    fn empty_file_is_disabled() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y").unwrap();
        assert!(load_keepout_polygon(file.path()).is_disabled());
    }
}
