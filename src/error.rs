use thiserror::Error;

/// Top-level error type for the Polyform geometry toolkit.
#[derive(Debug, Error)]
pub enum PolyformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to polygon operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{operation} requires at least {required} vertices, got {found}")]
    TooFewVertices {
        operation: &'static str,
        required: usize,
        found: usize,
    },
}

/// Convenience type alias for results using [`PolyformError`].
pub type Result<T> = std::result::Result<T, PolyformError>;
