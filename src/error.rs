use thiserror::Error;

/// Top-level error type for the keepout collision engine.
#[derive(Debug, Error)]
pub enum KeepoutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

/// Errors related to constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("coordinate {axis} = {value} cannot be represented in pixel space")]
    CoordinateOutOfRange { axis: &'static str, value: f64 },
}

/// Errors raised while reading a keepout boundary file.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("failed to read boundary: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `x,y`, found {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidCoordinate { line: usize, value: String },
}

/// Convenience type alias for results using [`KeepoutError`].
pub type Result<T> = std::result::Result<T, KeepoutError>;
