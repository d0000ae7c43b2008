//! Per-agent random streams, stored beside the agent vector.
//!
//! The decide phase borrows `&[Agent]` for reading and `&mut [AgentRng]` for
//! drawing at the same time.  Holding the streams outside `Agent` keeps those
//! two borrows disjoint, and lets rayon hand each worker one agent's stream:
//!
//! ```ignore
//! let agents: &[Agent] = &population.agents;
//! population.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| model.reorient(AgentId(i as u32), &ctx, rng))
//!     .collect::<Vec<f64>>();
//! ```

use fl_core::{AgentId, AgentRng};

/// One [`AgentRng`] per agent, indexed by [`AgentId`].
pub struct AgentRngs {
    pub inner:   Vec<AgentRng>,
    global_seed: u64,
}

impl AgentRngs {
    /// Streams for agents `0..count`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner, global_seed }
    }

    /// Seed the stream of the next agent and return its id.
    pub fn push(&mut self) -> AgentId {
        let id = AgentId(self.inner.len() as u32);
        self.inner.push(AgentRng::new(self.global_seed, id));
        id
    }

    /// Roll back to `len` streams after a failed placement batch.
    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
