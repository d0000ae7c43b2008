//! A behavior model under which agents never turn.

use fl_core::{AgentId, AgentRng};

use crate::{BehaviorModel, FlockContext};

/// Always returns the agent's current heading.  Agents move in straight
/// lines; useful for kinematics and border tests.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn reorient(&self, agent: AgentId, ctx: &FlockContext<'_>, _rng: &mut AgentRng) -> f64 {
        ctx.agents[agent.index()].heading()
    }
}
