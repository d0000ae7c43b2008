use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BehaviorError {
    #[error("decision noise standard deviation must be non-negative and finite, got {0}")]
    InvalidNoise(f64),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
