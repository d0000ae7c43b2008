use fl_behavior::BehaviorError;
use fl_core::FlockError;
use fl_perception::PerceptionError;
use fl_sweep::SweepError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(
        "unstable time step: an agent moves {displacement} per tick, \
         which must stay below the repulsion radius {ror}"
    )]
    Unstable { displacement: f64, ror: f64 },

    #[error("no position with at least one visible neighbour found after {attempts} attempts")]
    PlacementExhausted { attempts: u32 },

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] FlockError),

    #[error("perception: {0}")]
    Perception(#[from] PerceptionError),

    #[error("behavior: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("sweep: {0}")]
    Sweep(#[from] SweepError),
}

pub type SimResult<T> = Result<T, SimError>;
