use crate::error::{GeometryError, Result};
use crate::geometry::BoundingBox;

/// Creates a pixel-space detection box from normalized detector output.
///
/// Corners are given as fractions of the frame size and are scaled by the
/// frame dimensions, truncating toward zero.
pub struct MakeBox {
    corners: [f32; 4],
    width: u32,
    height: u32,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation for corners `[x1, y1, x2, y2]` in a
    /// `width` x `height` frame.
    #[must_use]
    pub fn from_normalized(corners: [f32; 4], width: u32, height: u32) -> Self {
        Self {
            corners,
            width,
            height,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoordinateOutOfRange` if a scaled coordinate is
    /// not finite or does not fit in an `i32`.
    pub fn execute(&self) -> Result<BoundingBox> {
        let [x1, y1, x2, y2] = self.corners;
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        Ok(BoundingBox::new(
            to_pixel("x1", x1, w)?,
            to_pixel("y1", y1, h)?,
            to_pixel("x2", x2, w)?,
            to_pixel("y2", y2, h)?,
        ))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_pixel(axis: &'static str, normalized: f32, extent: f64) -> Result<i32> {
    let value = (f64::from(normalized) * extent).trunc();
    if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(GeometryError::CoordinateOutOfRange { axis, value }.into());
    }
    Ok(value as i32)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn scales_and_truncates() {
        let b = MakeBox::from_normalized([0.1, 0.25, 0.5, 0.999], 960, 540)
            .execute()
            .unwrap();
        // 0.1 * 960 = 96.0000014..., 0.999 * 540 = 539.46
        assert_eq!(b.points()[0], Point::new(96, 135));
        assert_eq!(b.points()[3], Point::new(480, 539));
        assert_eq!(b.bottom_y(), 539);
    }

    #[test]
    fn detector_overshoot_is_kept() {
        let b = MakeBox::from_normalized([-0.05, 0.0, 1.025, 1.0], 100, 100)
            .execute()
            .unwrap();
        assert_eq!(b.points()[0], Point::new(-5, 0));
        assert_eq!(b.points()[3], Point::new(102, 100));
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let result = MakeBox::from_normalized([f32::NAN, 0.0, 0.5, 0.5], 100, 100).execute();
        assert!(result.is_err());

        let result = MakeBox::from_normalized([0.0, 0.0, f32::INFINITY, 0.5], 100, 100).execute();
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        let result = MakeBox::from_normalized([0.0, 0.0, 1.0e9, 0.5], 100, 100).execute();
        assert!(result.is_err());
    }
}
