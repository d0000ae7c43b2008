//! Run configuration and its validation.
//!
//! A [`FlockConfig`] is checked in full before any simulation state exists;
//! [`SimBuilder::build`](crate::SimBuilder::build) calls
//! [`FlockConfig::validate`] first.

use fl_agent::{AgentTemplate, TraitSpread, ZoneRadii};
use fl_behavior::ZoneModel;
use fl_core::{Border, BorderKind, SimConfig, Vec2};
use fl_perception::PerceptionConfig;
use fl_sweep::{Incrementor, SweepConfig};

use crate::{SimError, SimResult};

// ── BorderConfig ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderConfig {
    pub kind:   BorderKind,
    pub origin: Vec2,
    pub length: Vec2,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self { kind: BorderKind::Unbounded, origin: Vec2::ZERO, length: Vec2::new(100.0, 100.0) }
    }
}

impl BorderConfig {
    pub fn build(&self) -> SimResult<Border> {
        Ok(Border::try_new(self.kind, self.origin, self.length)?)
    }
}

// ── PopulationConfig ──────────────────────────────────────────────────────────

/// Population size, trait means and spreads.  Angles in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    pub count:        usize,
    pub speed:        f64,
    /// Radians per second.
    pub turning_rate: f64,
    pub radii:        ZoneRadii,
    pub spread:       TraitSpread,
    /// Standard deviation of the heading decision noise, radians.
    pub decision_sd:  f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            count:        20,
            speed:        1.0,
            turning_rate: std::f64::consts::FRAC_PI_2,
            radii:        ZoneRadii::new(1.0, 5.0, 10.0),
            spread:       TraitSpread::default(),
            decision_sd:  0.0,
        }
    }
}

impl PopulationConfig {
    pub fn template(&self) -> AgentTemplate {
        AgentTemplate::new(self.speed, self.turning_rate, self.radii).with_spread(self.spread)
    }
}

// ── TickBudget ────────────────────────────────────────────────────────────────

/// How long a run lasts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickBudget {
    Fixed(u64),
    /// Exactly one full up-and-down traversal of the sweep.
    FromSweep,
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockConfig {
    pub border:     BorderConfig,
    pub perception: PerceptionConfig,
    pub population: PopulationConfig,
    /// Orientation-radius sweep.  When present the run starts at its lower
    /// bound instead of `population.radii.roo`.
    pub sweep:      Option<SweepConfig>,
    pub ticks:      TickBudget,
    /// Seconds per tick.
    pub dt:         f64,
    pub seed:       u64,
    /// `on_snapshot` period in ticks; `0` disables snapshots.
    pub output_interval_ticks: u64,
    /// Add one highlighted agent at the origin.  It counts towards
    /// `population.count`.
    pub highlight:  bool,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            border:     BorderConfig::default(),
            perception: PerceptionConfig { view_dist: Some(20.0), ..PerceptionConfig::default() },
            population: PopulationConfig::default(),
            sweep:      None,
            ticks:      TickBudget::Fixed(1_000),
            dt:         0.1,
            seed:       0,
            output_interval_ticks: 0,
            highlight:  false,
        }
    }
}

impl FlockConfig {
    /// Check every parameter.  Perception, border and sweep parameters are
    /// validated by building them.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::Config(format!("time step must be positive, got {}", self.dt)));
        }

        let pop = &self.population;
        let means = [
            ("speed", pop.speed),
            ("turning rate", pop.turning_rate),
            ("ror", pop.radii.ror),
            ("roo", pop.radii.roo),
            ("roa", pop.radii.roa),
        ];
        for (name, v) in means {
            if !(v.is_finite() && v >= 0.0) {
                return Err(SimError::Config(format!("{name} must be non-negative, got {v}")));
            }
        }
        for sd in pop.spread.as_array() {
            if !(sd.is_finite() && sd >= 0.0) {
                return Err(SimError::Config(format!(
                    "trait standard deviations must be non-negative, got {sd}"
                )));
            }
        }
        ZoneModel::new(pop.decision_sd)?;

        let displacement = pop.speed * self.dt;
        if displacement >= pop.radii.ror {
            return Err(SimError::Unstable { displacement, ror: pop.radii.ror });
        }

        if self.highlight && pop.count == 0 {
            return Err(SimError::Config("a highlighted agent needs a population of at least one".into()));
        }

        self.border.build()?;
        self.perception.validate()?;
        self.incrementor()?;
        self.total_ticks()?;
        Ok(())
    }

    /// The sweep state machine, if a sweep is configured.
    pub fn incrementor(&self) -> SimResult<Option<Incrementor>> {
        Ok(self.sweep.as_ref().map(SweepConfig::build).transpose()?)
    }

    /// Resolve the tick budget.
    pub fn total_ticks(&self) -> SimResult<u64> {
        match self.ticks {
            TickBudget::Fixed(n) => Ok(n),
            TickBudget::FromSweep => match self.incrementor()? {
                Some(inc) => Ok(inc.total_ticks()),
                None => Err(SimError::Config("tick budget derived from a sweep, but no sweep is configured".into())),
            },
        }
    }

    /// Starting orientation radius: the sweep's lower bound when sweeping.
    pub fn initial_roo(&self) -> f64 {
        self.sweep.map_or(self.population.radii.roo, |s| s.inf_bound)
    }

    /// Loop parameters once the tick budget is known.
    pub fn sim_config(&self) -> SimResult<SimConfig> {
        Ok(SimConfig {
            dt:                    self.dt,
            total_ticks:           self.total_ticks()?,
            seed:                  self.seed,
            output_interval_ticks: self.output_interval_ticks,
        })
    }
}
