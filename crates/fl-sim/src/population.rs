//! The population: agents, their RNG streams, and the shared perception.

use fl_agent::{Agent, AgentRngs, AgentTemplate, Marker};
use fl_behavior::{BehaviorModel, FlockContext};
use fl_core::{AgentId, Border, SimRng, Tick, Vec2};
use fl_perception::Perception;

use crate::{AgentState, GroupStats, Quantities, SimError, SimResult};

/// Tries per agent before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100_000;

/// Size of the renderer's accent palette; regular agents draw an index in
/// `0..ACCENT_COUNT`.
pub const ACCENT_COUNT: u8 = 6;

/// A group of agents sharing one perception pipeline and border.
///
/// `agents[i]` and `rngs.inner[i]` belong to `AgentId(i)`.  Agents are only
/// ever appended.
pub struct Population {
    pub agents: Vec<Agent>,

    /// Per-agent decision RNGs, kept apart from `agents` for the split borrow
    /// in [`tick`](Self::tick).
    pub rngs: AgentRngs,

    /// Placement and trait-sampling stream.
    rng: SimRng,

    perception: Perception,
    template:   AgentTemplate,
    decision_sd: f64,
}

impl Population {
    /// Empty population.  `seed` determines every random draw made by it.
    pub fn new(perception: Perception, template: AgentTemplate, decision_sd: f64, seed: u64) -> Self {
        let mut root = SimRng::new(seed);
        let rng = root.child(0);
        let rngs = AgentRngs::new(0, root.random());
        Self { agents: Vec::new(), rngs, rng, perception, template, decision_sd }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn perception(&self) -> &Perception {
        &self.perception
    }

    #[inline]
    pub fn border(&self) -> &Border {
        self.perception.border()
    }

    pub fn template(&self) -> &AgentTemplate {
        &self.template
    }

    pub fn decision_sd(&self) -> f64 {
        self.decision_sd
    }

    /// Current population-level orientation radius.
    pub fn roo(&self) -> f64 {
        self.template.radii.roo
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Place an agent with mean traits at a given pose.  No visibility check.
    pub fn add_agent_at(&mut self, marker: Marker, position: Vec2, heading: f64) -> AgentId {
        let traits = self.template.mean();
        let agent = Agent::new(position, heading, traits.speed, traits.turning_rate, traits.radii)
            .with_marker(marker);
        self.push(agent)
    }

    /// Uniform heading in `[-π, π)` from the placement stream.
    pub fn draw_heading(&mut self) -> f64 {
        self.rng.angle()
    }

    /// Insert a pre-built agent as-is (position is wrapped).
    pub fn push(&mut self, mut agent: Agent) -> AgentId {
        agent.position = self.border().wrap(agent.position);
        self.agents.push(agent);
        self.rngs.push()
    }

    /// Draw traits from the template and place the agent near the border
    /// origin, retrying until it sees at least one neighbour.
    pub fn add_agent(&mut self, marker: Marker) -> SimResult<AgentId> {
        let traits = self.template.sample(&mut self.rng);
        let origin = self.border().origin;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let r = traits.radii.roa * self.rng.random::<f64>();
            let theta = self.rng.angle();
            let position = self.border().wrap(origin + Vec2::from_angle(theta) * r);
            let heading = self.rng.angle();
            let candidate = Agent::new(position, heading, traits.speed, traits.turning_rate, traits.radii)
                .with_marker(marker);

            if self.agents.is_empty() || !self.perception.detect_for(&candidate, &self.agents).is_empty() {
                return Ok(self.push(candidate));
            }
        }
        Err(SimError::PlacementExhausted { attempts: MAX_PLACEMENT_ATTEMPTS })
    }

    /// Add `count` randomly placed regular agents.  On failure every agent
    /// added by this call is removed again.
    pub fn populate(&mut self, count: usize) -> SimResult<()> {
        let before = self.agents.len();
        for _ in 0..count {
            let marker = Marker::Regular(self.rng.gen_range(0..ACCENT_COUNT));
            if let Err(e) = self.add_agent(marker) {
                self.agents.truncate(before);
                self.rngs.truncate(before);
                return Err(e);
            }
        }
        Ok(())
    }

    // ── Dynamics ──────────────────────────────────────────────────────────

    /// Advance every agent by one step.
    ///
    /// Phase 1 computes all target headings against the agents as they were
    /// at the start of the tick.  Phase 2 turns, moves and wraps each agent.
    pub fn tick<B: BehaviorModel>(&mut self, tick: Tick, dt: f64, model: &B) {
        let targets = self.decide(tick, dt, model);

        let border = *self.perception.border();
        for (agent, target) in self.agents.iter_mut().zip(targets) {
            agent.turn_to(target, dt);
            agent.tick(dt);
            agent.position = border.wrap(agent.position);
        }
    }

    fn decide<B: BehaviorModel>(&mut self, tick: Tick, dt: f64, model: &B) -> Vec<f64> {
        let ctx = FlockContext::new(tick, dt, &self.agents, &self.perception);
        let rngs = &mut self.rngs.inner;

        #[cfg(not(feature = "parallel"))]
        {
            rngs.iter_mut()
                .enumerate()
                .map(|(i, rng)| model.reorient(AgentId(i as u32), &ctx, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.par_iter_mut()
                .enumerate()
                .map(|(i, rng)| model.reorient(AgentId(i as u32), &ctx, rng))
                .collect()
        }
    }

    /// Set the population-level orientation radius.
    ///
    /// Every agent's personal `roo` moves by the same amount, so individual
    /// spread around the mean survives the change.
    pub fn set_roo(&mut self, roo: f64) {
        let shift = roo - self.template.radii.roo;
        if shift == 0.0 {
            return;
        }
        for agent in &mut self.agents {
            agent.radii.roo += shift;
        }
        self.template.radii.roo = roo;
    }

    // ── Statistics ────────────────────────────────────────────────────────

    pub fn stats(&self) -> GroupStats {
        GroupStats::compute(&self.agents, self.border())
    }

    /// Group measures plus the parameters currently in effect.
    pub fn quantities(&self, is_roo_rising: bool) -> Quantities {
        let stats = self.stats();
        Quantities {
            center:        stats.center,
            direction:     stats.direction,
            polarization:  stats.polarization,
            momentum:      stats.momentum,
            speed:         self.template.speed,
            turning_rate:  self.template.turning_rate,
            radii:         self.template.radii,
            spread:        self.template.spread,
            decision_sd:   self.decision_sd,
            is_roo_rising,
        }
    }

    /// One record per agent, in id order.
    pub fn final_state(&self) -> Vec<AgentState> {
        let stats = self.stats();
        self.agents
            .iter()
            .enumerate()
            .map(|(i, a)| AgentState {
                id:           i as u32,
                position:     a.position,
                heading:      a.heading(),
                speed:        a.speed,
                turning_rate: a.turning_rate,
                radii:        a.radii,
                front_idx:    stats.front_order[i],
                center_idx:   stats.center_order[i],
            })
            .collect()
    }
}
