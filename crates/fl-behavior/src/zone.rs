//! The three-zone reorientation rule.
//!
//! Each visible neighbour falls into at most one zone of the *observer's*
//! personal radii, with inclusive outer bounds:
//!
//! ```text
//!  0 ──── ror ──────── roo ──────── roa ────→ distance
//!   repulsion  orientation  attraction   ignored
//! ```
//!
//! Priority: any repulsion wins outright.  Otherwise orientation, averaged
//! with attraction when both are present.  Otherwise attraction alone.
//! With nothing in any zone the agent keeps its heading.  Decision noise is
//! added in every case.

use fl_agent::ZoneRadii;
use fl_core::{AgentId, AgentRng, NEAR_ZERO, Vec2};

use crate::{BehaviorError, BehaviorModel, BehaviorResult, FlockContext};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Repulsion,
    Orientation,
    Attraction,
}

impl Zone {
    /// Zone a neighbour at `distance` falls into, or `None` beyond `roa`.
    pub fn classify(distance: f64, radii: &ZoneRadii) -> Option<Zone> {
        if distance <= radii.ror {
            Some(Zone::Repulsion)
        } else if distance <= radii.roo {
            Some(Zone::Orientation)
        } else if distance <= radii.roa {
            Some(Zone::Attraction)
        } else {
            None
        }
    }
}

/// Accumulated per-zone desired directions for one observer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ZoneSums {
    /// `−Σ unit(d)` over repulsion neighbours.
    pub repulsion:   Vec2,
    /// `Σ unit(heading)` over orientation neighbours.
    pub orientation: Vec2,
    /// `Σ unit(d)` over attraction neighbours.
    pub attraction:  Vec2,
    pub n_repulsion:   usize,
    pub n_orientation: usize,
    pub n_attraction:  usize,
}

impl ZoneSums {
    /// Combined desired direction, or `None` if no rule applies.
    pub fn desired(&self) -> Option<Vec2> {
        let dir = if self.n_repulsion > 0 {
            self.repulsion
        } else if self.n_orientation > 0 {
            if self.n_attraction > 0 {
                (self.orientation + self.attraction) * 0.5
            } else {
                self.orientation
            }
        } else if self.n_attraction > 0 {
            self.attraction
        } else {
            return None;
        };
        // Perfectly cancelling contributions carry no direction.
        (!dir.is_near_zero()).then_some(dir)
    }
}

/// Zone-based flocking rule with Gaussian decision noise.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneModel {
    /// Standard deviation of the heading noise, radians.
    noise_sd: f64,
}

impl ZoneModel {
    pub fn new(noise_sd: f64) -> BehaviorResult<Self> {
        if !(noise_sd.is_finite() && noise_sd >= 0.0) {
            return Err(BehaviorError::InvalidNoise(noise_sd));
        }
        Ok(Self { noise_sd })
    }

    /// Noise-free model.
    pub fn deterministic() -> Self {
        Self { noise_sd: 0.0 }
    }

    #[inline]
    pub fn noise_sd(&self) -> f64 {
        self.noise_sd
    }

    /// Bucket the visible neighbours of `agent` into zones.
    ///
    /// A neighbour sharing the agent's position gets a random escape
    /// direction from `rng` and counts as distance zero.
    pub fn sums(&self, agent: AgentId, ctx: &FlockContext<'_>, rng: &mut AgentRng) -> ZoneSums {
        let me = &ctx.agents[agent.index()];
        let border = ctx.perception.border();
        let mut sums = ZoneSums::default();

        for other_id in ctx.perception.detect(agent, ctx.agents) {
            let other = &ctx.agents[other_id.index()];
            let d = border.vector(me.position, other.position);
            let dist = d.norm();
            let (unit, dist) = if dist < NEAR_ZERO {
                (rng.unit_vector(), 0.0)
            } else {
                (d / dist, dist)
            };

            match Zone::classify(dist, &me.radii) {
                Some(Zone::Repulsion) => {
                    sums.repulsion -= unit;
                    sums.n_repulsion += 1;
                }
                Some(Zone::Orientation) => {
                    sums.orientation += other.direction();
                    sums.n_orientation += 1;
                }
                Some(Zone::Attraction) => {
                    sums.attraction += unit;
                    sums.n_attraction += 1;
                }
                None => {}
            }
        }
        sums
    }
}

impl BehaviorModel for ZoneModel {
    fn reorient(&self, agent: AgentId, ctx: &FlockContext<'_>, rng: &mut AgentRng) -> f64 {
        let sums = self.sums(agent, ctx, rng);
        let base = match sums.desired() {
            Some(dir) => dir.angle(),
            None      => ctx.agents[agent.index()].heading(),
        };
        base + rng.gauss(self.noise_sd)
    }
}
