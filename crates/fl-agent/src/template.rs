//! Population-level trait means and their per-agent Gaussian spread.
//!
//! Each new agent receives its own speed, turning rate and radii drawn
//! independently as `mean + N(0, sd)`.  A zero spread skips the draw, so a
//! population without trait noise consumes no randomness here.  Draws are
//! floored at zero: a negative speed or radius has no physical meaning and a
//! negative turning rate would invert the clamp in `Agent::turn_by`.

use fl_core::SimRng;

use crate::ZoneRadii;

/// Standard deviations of the per-agent trait noise.  All default to zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitSpread {
    pub speed_sd:        f64,
    pub turning_rate_sd: f64,
    pub ror_sd:          f64,
    pub roo_sd:          f64,
    pub roa_sd:          f64,
}

impl TraitSpread {
    /// `true` if any spread is non-zero.
    pub fn is_noisy(&self) -> bool {
        self.as_array().iter().any(|&sd| sd > 0.0)
    }

    pub fn as_array(&self) -> [f64; 5] {
        [self.speed_sd, self.turning_rate_sd, self.ror_sd, self.roo_sd, self.roa_sd]
    }
}

/// One agent's drawn kinematic parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentTraits {
    pub speed:        f64,
    pub turning_rate: f64,
    pub radii:        ZoneRadii,
}

/// Means and spreads from which agents are drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentTemplate {
    pub speed:        f64,
    pub turning_rate: f64,
    pub radii:        ZoneRadii,
    pub spread:       TraitSpread,
}

impl AgentTemplate {
    pub fn new(speed: f64, turning_rate: f64, radii: ZoneRadii) -> Self {
        Self { speed, turning_rate, radii, spread: TraitSpread::default() }
    }

    pub fn with_spread(mut self, spread: TraitSpread) -> Self {
        self.spread = spread;
        self
    }

    /// The traits an agent gets with no noise applied.
    pub fn mean(&self) -> AgentTraits {
        AgentTraits { speed: self.speed, turning_rate: self.turning_rate, radii: self.radii }
    }

    /// Draw one agent's traits.  Order of draws: speed, turning rate, ror,
    /// roo, roa.
    pub fn sample(&self, rng: &mut SimRng) -> AgentTraits {
        let s = &self.spread;
        let speed = (self.speed + rng.gauss(s.speed_sd)).max(0.0);
        let turning_rate = (self.turning_rate + rng.gauss(s.turning_rate_sd)).max(0.0);
        let ror = (self.radii.ror + rng.gauss(s.ror_sd)).max(0.0);
        let roo = (self.radii.roo + rng.gauss(s.roo_sd)).max(0.0);
        let roa = (self.radii.roa + rng.gauss(s.roa_sd)).max(0.0);
        AgentTraits { speed, turning_rate, radii: ZoneRadii { ror, roo, roa } }
    }
}
