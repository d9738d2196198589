use thiserror::Error;

/// Top-level error type for the curve library.
#[derive(Debug, Error)]
pub enum BendyError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to curve evaluation and construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("t ({value}) must be >= 0.0 and <= 1.0")]
    ParameterOutOfRange { value: f64 },

    #[error("count ({count}) must be >= 1")]
    CountOutOfRange { count: usize },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("composite curve has no segments")]
    EmptyComposite,

    #[error("composite curve is already closed")]
    AlreadyClosed,
}

/// Errors related to drawing curves onto a target.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid drawing target: {0}")]
    InvalidTarget(String),

    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`BendyError`].
pub type Result<T> = std::result::Result<T, BendyError>;
