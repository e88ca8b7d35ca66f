use thiserror::Error;

/// Top-level error type for georot.
#[derive(Debug, Error)]
pub enum GeorotError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Decomposition(#[from] DecompositionError),
}

/// Errors caused by malformed caller input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("unknown euler axis order: {0}")]
    UnknownEulerOrder(String),
}

/// Failures of the numerical linear-algebra services.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecompositionError {
    #[error("singular value decomposition did not converge")]
    SvdNotConverged,

    #[error("eigen decomposition did not converge")]
    EigenNotConverged,

    #[error("no real eigenvalue close to 1: input is not a rotation matrix")]
    NoUnitEigenvalue,
}

/// Convenience type alias for results using [`GeorotError`].
pub type Result<T> = std::result::Result<T, GeorotError>;
