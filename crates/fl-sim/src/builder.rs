//! Fluent builder for constructing a [`Sim`].

use fl_agent::{Agent, Marker};
use fl_behavior::{BehaviorModel, ZoneModel};
use fl_perception::Perception;
use tracing::info;

use crate::{FlockConfig, Population, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`FlockConfig`]: border, perception, population, sweep, timing
/// - `B: BehaviorModel`: the reorientation rule
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                         |
/// |----------------------|-------------------------------------------------|
/// | `.perception(p)`     | Built from `config.perception` and the border   |
/// | `.agents(v)`         | `population.count` agents placed at random      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::from_config(config)?.build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:     FlockConfig,
    behavior:   B,
    perception: Option<Perception>,
    agents:     Option<Vec<Agent>>,
}

impl SimBuilder<ZoneModel> {
    /// Builder using the zone rule with the configured decision noise.
    pub fn from_config(config: FlockConfig) -> SimResult<Self> {
        let model = ZoneModel::new(config.population.decision_sd)?;
        Ok(Self::new(config, model))
    }
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(config: FlockConfig, behavior: B) -> Self {
        Self { config, behavior, perception: None, agents: None }
    }

    /// Use a pre-built perception pipeline instead of `config.perception`.
    /// Its border replaces `config.border`.
    pub fn perception(mut self, perception: Perception) -> Self {
        self.perception = Some(perception);
        self
    }

    /// Start from hand-placed agents instead of random placement.
    ///
    /// Must be length `population.count`.  Positions are wrapped through the
    /// border; the highlight flag is ignored.
    pub fn agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Validate the configuration, place the population, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        let config = self.config;
        config.validate()?;

        let sim_config = config.sim_config()?;
        let sweep = config.incrementor()?;

        let perception = match self.perception {
            Some(p) => p,
            None => Perception::from_config(config.border.build()?, &config.perception)?,
        };

        let mut template = config.population.template();
        template.radii.roo = config.initial_roo();
        let count = config.population.count;

        let mut population = Population::new(perception, template, config.population.decision_sd, config.seed);

        match self.agents {
            Some(agents) => {
                if agents.len() != count {
                    return Err(SimError::AgentCountMismatch {
                        expected: count,
                        got:      agents.len(),
                        what:     "initial agents",
                    });
                }
                for agent in agents {
                    population.push(agent);
                }
            }
            None => {
                let mut remaining = count;
                if config.highlight {
                    let origin = population.border().origin;
                    let heading = population.draw_heading();
                    population.add_agent_at(Marker::Highlight, origin, heading);
                    remaining -= 1;
                }
                population.populate(remaining)?;
            }
        }

        info!(
            agents = population.len(),
            border = %population.border().kind,
            stages = population.perception().stages().len(),
            total_ticks = sim_config.total_ticks,
            sweep = sweep.is_some(),
            "simulation built"
        );

        Ok(Sim {
            clock:    sim_config.make_clock(),
            config:   sim_config,
            population,
            behavior: self.behavior,
            sweep,
        })
    }
}
