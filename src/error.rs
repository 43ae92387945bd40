use thiserror::Error;

/// Errors raised around the estimator. Estimation itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("image rotation needs at least one frame")]
    EmptyRotation,

    #[error("rotation interval must be greater than zero")]
    ZeroInterval,

    #[error("rotator thread panicked")]
    RotatorPanicked,

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
