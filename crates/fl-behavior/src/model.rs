//! The `BehaviorModel` trait.

use fl_core::{AgentId, AgentRng};

use crate::FlockContext;

/// Pluggable heading decision.
///
/// The simulation loop may call `reorient` for many agents in parallel, so
/// implementations must be `Send + Sync` and keep no per-call state.  All
/// randomness comes from the agent's own [`AgentRng`], which makes the result
/// independent of visiting order.
pub trait BehaviorModel: Send + Sync + 'static {
    /// Target heading (radians, not necessarily normalised) for `agent`.
    ///
    /// The caller turns the agent towards it, rate-limited by the agent's
    /// turning rate.
    fn reorient(&self, agent: AgentId, ctx: &FlockContext<'_>, rng: &mut AgentRng) -> f64;
}
