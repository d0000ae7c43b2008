//! Read-only simulation state passed to every reorientation call.

use fl_agent::Agent;
use fl_core::Tick;
use fl_perception::Perception;

/// A frozen snapshot of the population for one decision phase.
///
/// Built once per tick by fl-sim and shared immutably across all agents.
pub struct FlockContext<'a> {
    /// Tick being computed.
    pub tick: Tick,

    /// Seconds per tick.
    pub dt: f64,

    /// Every agent, indexed by `AgentId`, as of the start of the tick.
    pub agents: &'a [Agent],

    /// Neighbour-visibility pipeline (carries the border).
    pub perception: &'a Perception,
}

impl<'a> FlockContext<'a> {
    #[inline]
    pub fn new(tick: Tick, dt: f64, agents: &'a [Agent], perception: &'a Perception) -> Self {
        Self { tick, dt, agents, perception }
    }
}
