use thiserror::Error;

/// Top-level error type for the track fill crate.
#[derive(Debug, Error)]
pub enum TrackFillError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Preview(#[from] PreviewError),

    #[error(transparent)]
    Track(#[from] TrackError),
}

/// Errors raised when fill parameters violate their contract.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("spacing must be positive, got {0}")]
    NonPositiveSpacing(f64),

    #[error("spacing must be finite, got {0}")]
    NonFiniteSpacing(f64),

    #[error("angle must be finite, got {0}")]
    NonFiniteAngle(f64),

    #[error("unknown line kind index {0}")]
    UnknownLineKind(u8),
}

/// Errors related to the live-preview state machine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PreviewError {
    #[error("fill preview is not active")]
    Inactive,

    #[error("no uncommitted preview to commit")]
    NothingToCommit,
}

/// Errors raised by the in-memory track store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    #[error("no line ids left to allocate")]
    IdsExhausted,
}

/// Convenience type alias for results using [`TrackFillError`].
pub type Result<T> = std::result::Result<T, TrackFillError>;
