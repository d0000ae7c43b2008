//! Errors raised by the core geometry types.
//!
//! Downstream crates keep their own enums; `fl-sim` wraps this one.

use thiserror::Error;

use crate::Vec2;

#[derive(Debug, Error, PartialEq)]
pub enum FlockError {
    #[error("border length must be finite and non-negative, got {0}")]
    InvalidExtent(Vec2),

    #[error("periodic border needs a positive period on both axes, got {0}")]
    ZeroPeriod(Vec2),

    #[error("unknown border kind '{0}' (expected none, clip or wrap)")]
    UnknownBorder(String),
}

pub type FlockResult<T> = Result<T, FlockError>;
