use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PerceptionError {
    #[error("no perception stage requested (need a view distance, blind spot, neighbour count or outlier threshold)")]
    Empty,

    #[error("{bisectors} blind-spot bisectors but {openings} openings")]
    BlindSpotMismatch { bisectors: usize, openings: usize },

    #[error("blind-spot opening {0} rad is outside (0, π]")]
    InvalidOpening(f64),

    #[error("blind-spot bisector {0} rad is outside [-π, π)")]
    InvalidBisector(f64),

    #[error("view distance must be positive and finite, got {0}")]
    InvalidRange(f64),

    #[error("neighbour count must be at least 1")]
    ZeroNeighbors,

    #[error("outlier threshold must be non-negative and finite, got {0}")]
    InvalidThreshold(f64),

    #[error("stage '{0}' may appear at most once")]
    DuplicateStage(&'static str),
}

pub type PerceptionResult<T> = Result<T, PerceptionError>;
