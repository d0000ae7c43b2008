//! The ordered perception pipeline.

use fl_agent::Agent;
use fl_core::{AgentId, Border};

use crate::{PerceptionConfig, PerceptionError, PerceptionResult, Stage};

/// Immutable, shareable neighbour-visibility pipeline.
///
/// Stages are stored innermost first and are guaranteed to be in
/// Range → BlindSpot* → Knn → Outlier order with at most one Range, Knn and
/// Outlier.  Build through [`PerceptionBuilder`] or
/// [`Perception::from_config`].
#[derive(Clone, Debug, PartialEq)]
pub struct Perception {
    border: Border,
    stages: Vec<Stage>,
}

impl Perception {
    pub fn builder(border: Border) -> PerceptionBuilder {
        PerceptionBuilder::new(border)
    }

    /// Build the pipeline described by `config`.
    pub fn from_config(border: Border, config: &PerceptionConfig) -> PerceptionResult<Self> {
        let mut builder = PerceptionBuilder::new(border);
        if let Some(d) = config.view_dist {
            builder = builder.range(d);
        }
        for (bisector, opening) in config.blind_spots()? {
            builder = builder.blind_spot(bisector, opening);
        }
        if let Some(k) = config.neighbors {
            builder = builder.knn(k);
        }
        if let Some(t) = config.outlier_threshold {
            builder = builder.outlier(t);
        }
        builder.build()
    }

    #[inline]
    pub fn border(&self) -> &Border {
        &self.border
    }

    /// Stages, innermost first.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Neighbours of `subject` among `agents`, after every stage.
    pub fn detect(&self, subject: AgentId, agents: &[Agent]) -> Vec<AgentId> {
        let candidates = (0..agents.len() as u32)
            .map(AgentId)
            .filter(|&id| id != subject)
            .collect();
        self.narrow(&agents[subject.index()], agents, candidates)
    }

    /// Neighbours a prospective agent (not part of `agents`) would see.
    ///
    /// Used during placement to check that a newcomer is not isolated.
    pub fn detect_for(&self, observer: &Agent, agents: &[Agent]) -> Vec<AgentId> {
        let candidates = (0..agents.len() as u32).map(AgentId).collect();
        self.narrow(observer, agents, candidates)
    }

    fn narrow(&self, observer: &Agent, agents: &[Agent], mut candidates: Vec<AgentId>) -> Vec<AgentId> {
        for stage in &self.stages {
            if candidates.is_empty() {
                break;
            }
            candidates = stage.filter(&self.border, observer, agents, candidates);
        }
        candidates
    }
}

/// Collects stages and validates them into a [`Perception`].
///
/// Stages may be added in any order; `build` sorts them into the narrowing
/// order (stable, so multiple blind spots keep their declaration order).
pub struct PerceptionBuilder {
    border: Border,
    stages: Vec<Stage>,
}

impl PerceptionBuilder {
    pub fn new(border: Border) -> Self {
        Self { border, stages: Vec::new() }
    }

    pub fn range(self, max_dist: f64) -> Self {
        self.stage(Stage::Range { max_dist })
    }

    pub fn blind_spot(self, bisector: f64, opening: f64) -> Self {
        self.stage(Stage::BlindSpot { bisector, opening })
    }

    pub fn knn(self, k: usize) -> Self {
        self.stage(Stage::Knn { k })
    }

    pub fn outlier(self, threshold: f64) -> Self {
        self.stage(Stage::Outlier { threshold })
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn build(mut self) -> PerceptionResult<Perception> {
        if self.stages.is_empty() {
            return Err(PerceptionError::Empty);
        }
        for stage in &self.stages {
            stage.validate()?;
        }
        self.stages.sort_by_key(Stage::rank);
        for pair in self.stages.windows(2) {
            let unique = !matches!(pair[0], Stage::BlindSpot { .. });
            if unique && pair[0].rank() == pair[1].rank() {
                return Err(PerceptionError::DuplicateStage(pair[0].name()));
            }
        }
        Ok(Perception { border: self.border, stages: self.stages })
    }
}
