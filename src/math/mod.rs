pub mod orientation;

pub use orientation::{orientation, Orientation};

/// 2D floating-point point type used for metric computations.
pub type Point2 = nalgebra::Point2<f64>;

/// Tolerance for the on-segment test.
///
/// The comparison against it is one-sided: `(|ap| + |pb|) - |ab| < EPSILON`.
pub const EPSILON: f64 = 1e-9;
