use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    #[error("sweep upper bound {sup} must exceed lower bound {inf}")]
    InvalidBounds { inf: f64, sup: f64 },

    #[error("sweep increment must be positive and finite, got {0}")]
    InvalidIncrement(f64),

    #[error("sweep step duration must be at least one tick")]
    ZeroStepDuration,

    #[error("sweep requested without a step duration")]
    MissingStepDuration,

    #[error("sweep range parse error: {0}")]
    Parse(String),
}

pub type SweepResult<T> = Result<T, SweepError>;
