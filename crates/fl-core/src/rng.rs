//! Seeded random streams.
//!
//! Two kinds of stream exist:
//!
//! - [`SimRng`]: one per population, used sequentially for placement, trait
//!   sampling and palette picks.
//! - [`AgentRng`]: one per agent, used for decision noise and the
//!   co-location escape direction.  Seeded from `(global_seed, agent id)`
//!   only, so an agent's draws do not depend on the order in which the
//!   decide phase visits agents.
//!
//! Seeds are spread with the 64-bit golden-ratio constant so that
//! consecutive ids land far apart in `SmallRng`'s seed space.

use std::f64::consts::PI;

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Distribution, Standard};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::{AgentId, Vec2};

const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

#[inline]
fn seeded(seed: u64, salt: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ salt.wrapping_mul(GOLDEN))
}

/// `N(0, sd²)`; a non-positive `sd` yields `0.0` and leaves the stream
/// untouched.
#[inline]
fn normal(rng: &mut SmallRng, sd: f64) -> f64 {
    if sd > 0.0 { sd * rng.sample::<f64, _>(StandardNormal) } else { 0.0 }
}

#[inline]
fn uniform_angle(rng: &mut SmallRng) -> f64 {
    rng.gen_range(-PI..PI)
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Private stream of one agent.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        AgentRng(seeded(global_seed, agent.0 as u64))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gauss(&mut self, sd: f64) -> f64 {
        normal(&mut self.0, sd)
    }

    /// Unit vector with a uniformly drawn direction.
    #[inline]
    pub fn unit_vector(&mut self) -> Vec2 {
        Vec2::from_angle(uniform_angle(&mut self.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Population-level stream.  Not shared across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream; `salt` tells siblings apart.
    pub fn child(&mut self, salt: u64) -> SimRng {
        let seed: u64 = self.0.r#gen();
        SimRng(seeded(seed, salt))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gauss(&mut self, sd: f64) -> f64 {
        normal(&mut self.0, sd)
    }

    /// Uniform angle in `[-π, π)`.
    #[inline]
    pub fn angle(&mut self) -> f64 {
        uniform_angle(&mut self.0)
    }
}
