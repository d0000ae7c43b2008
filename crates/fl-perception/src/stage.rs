//! The four neighbour filters.
//!
//! Every filter takes the candidate list produced by the previous stage and
//! returns a subset of it, preserving input order unless stated otherwise.

use std::f64::consts::PI;

use fl_agent::Agent;
use fl_core::{AgentId, Border, circular_mean, normalize_angle};

use crate::{PerceptionError, PerceptionResult};

/// One narrowing step of the pipeline.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Keep neighbours strictly closer than `max_dist`.
    Range { max_dist: f64 },
    /// Drop neighbours whose bearing lies within `±opening/2` of `bisector`
    /// (relative to the observer's heading).
    BlindSpot { bisector: f64, opening: f64 },
    /// Keep the `k` nearest neighbours.
    Knn { k: usize },
    /// Keep only the neighbour whose heading deviates most from the group's
    /// circular mean.  The set passes unchanged only when every heading
    /// matches the mean.  `threshold` is carried as a run parameter and
    /// validated but does not gate the choice.
    Outlier { threshold: f64 },
}

impl Stage {
    /// Position in the fixed narrowing order (lower runs first).
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Stage::Range { .. }     => 0,
            Stage::BlindSpot { .. } => 1,
            Stage::Knn { .. }       => 2,
            Stage::Outlier { .. }   => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Range { .. }     => "range",
            Stage::BlindSpot { .. } => "blind-spot",
            Stage::Knn { .. }       => "knn",
            Stage::Outlier { .. }   => "outlier",
        }
    }

    /// Reject malformed parameters.  Called once by the builder.
    pub fn validate(&self) -> PerceptionResult<()> {
        match *self {
            Stage::Range { max_dist } => {
                if !(max_dist.is_finite() && max_dist > 0.0) {
                    return Err(PerceptionError::InvalidRange(max_dist));
                }
            }
            Stage::BlindSpot { bisector, opening } => {
                if !(opening > 0.0 && opening <= PI) {
                    return Err(PerceptionError::InvalidOpening(opening));
                }
                if !(-PI..PI).contains(&bisector) {
                    return Err(PerceptionError::InvalidBisector(bisector));
                }
            }
            Stage::Knn { k } => {
                if k == 0 {
                    return Err(PerceptionError::ZeroNeighbors);
                }
            }
            Stage::Outlier { threshold } => {
                if !(threshold.is_finite() && threshold >= 0.0) {
                    return Err(PerceptionError::InvalidThreshold(threshold));
                }
            }
        }
        Ok(())
    }

    /// Apply this stage to `candidates` as seen by `observer`.
    pub fn filter(
        &self,
        border:     &Border,
        observer:   &Agent,
        agents:     &[Agent],
        candidates: Vec<AgentId>,
    ) -> Vec<AgentId> {
        match *self {
            Stage::Range { max_dist } => candidates
                .into_iter()
                .filter(|id| border.distance(observer.position, agents[id.index()].position) < max_dist)
                .collect(),

            Stage::BlindSpot { bisector, opening } => {
                let half = opening * 0.5;
                candidates
                    .into_iter()
                    .filter(|id| {
                        let to_other = border.vector(observer.position, agents[id.index()].position);
                        let bearing = normalize_angle(to_other.angle() - observer.heading());
                        normalize_angle(bearing - bisector).abs() > half
                    })
                    .collect()
            }

            Stage::Knn { k } => {
                if candidates.len() <= k {
                    return candidates;
                }
                let mut by_dist: Vec<(f64, AgentId)> = candidates
                    .into_iter()
                    .map(|id| (border.distance(observer.position, agents[id.index()].position), id))
                    .collect();
                // Stable: equal distances keep input order.
                by_dist.sort_by(|a, b| a.0.total_cmp(&b.0));
                by_dist.truncate(k);
                by_dist.into_iter().map(|(_, id)| id).collect()
            }

            Stage::Outlier { .. } => {
                let headings: Vec<f64> = candidates.iter().map(|id| agents[id.index()].heading()).collect();
                let Some(mean) = circular_mean(&headings) else {
                    return candidates;
                };
                let mut outlier = None;
                let mut max_dev = 0.0;
                for (&id, &h) in candidates.iter().zip(&headings) {
                    let dev = normalize_angle(h - mean).abs();
                    if dev > max_dev {
                        max_dev = dev;
                        outlier = Some(id);
                    }
                }
                match outlier {
                    Some(id) => vec![id],
                    None     => candidates,
                }
            }
        }
    }
}
