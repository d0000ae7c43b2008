//! Aggregate group measures and per-agent records.
//!
//! Everything here is computed on demand from the current agent slice and the
//! border; nothing is cached between ticks.
//!
//! | Measure        | Definition                                                        |
//! |----------------|-------------------------------------------------------------------|
//! | `center`       | `origin + mean(border.vector(origin, p))`                         |
//! | `direction`    | mean of unit heading vectors                                      |
//! | `polarization` | `|direction|`, 1 when all agents agree                            |
//! | `momentum`     | `|mean(cross(unit(border.vector(center, p)), unit(heading)))|`    |
//! | front rank     | ascending projection of `border.vector(center, p)` on `direction` |
//! | centre rank    | ascending squared distance to `center`                            |

use std::fmt;

use fl_agent::{Agent, TraitSpread, ZoneRadii};
use fl_core::{Border, Vec2};

// ── GroupStats ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupStats {
    pub center:       Vec2,
    pub direction:    Vec2,
    pub polarization: f64,
    pub momentum:     f64,
    /// `front_order[i]` is agent `i`'s rank from the back of the group.
    pub front_order:  Vec<usize>,
    /// `center_order[i]` is agent `i`'s rank from the centre outwards.
    pub center_order: Vec<usize>,
}

impl GroupStats {
    pub fn compute(agents: &[Agent], border: &Border) -> Self {
        if agents.is_empty() {
            return Self {
                center:       border.origin,
                direction:    Vec2::ZERO,
                polarization: 0.0,
                momentum:     0.0,
                front_order:  Vec::new(),
                center_order: Vec::new(),
            };
        }
        let n = agents.len() as f64;

        let offset: Vec2 = agents.iter().map(|a| border.vector(border.origin, a.position)).sum();
        let center = border.origin + offset / n;

        let direction = agents.iter().map(Agent::direction).sum::<Vec2>() / n;

        let rel: Vec<Vec2> = agents.iter().map(|a| border.vector(center, a.position)).collect();
        let cross_sum: f64 = rel
            .iter()
            .zip(agents)
            .map(|(r, a)| r.normalized().cross(a.direction()))
            .sum();

        let front_order = ranks(rel.iter().map(|r| r.dot(direction)));
        let center_order = ranks(rel.iter().map(|r| r.norm_sq()));

        Self {
            center,
            direction,
            polarization: direction.norm(),
            momentum: (cross_sum / n).abs(),
            front_order,
            center_order,
        }
    }
}

impl fmt::Display for GroupStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center={} direction={} polarization={:.5} momentum={:.5}",
            self.center, self.direction, self.polarization, self.momentum
        )
    }
}

/// Rank of every element after a stable ascending sort by `keys`.
fn ranks(keys: impl Iterator<Item = f64>) -> Vec<usize> {
    let mut keyed: Vec<(f64, usize)> = keys.enumerate().map(|(i, k)| (k, i)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut order = vec![0; keyed.len()];
    for (rank, &(_, i)) in keyed.iter().enumerate() {
        order[i] = rank;
    }
    order
}

// ── Quantities ────────────────────────────────────────────────────────────────

/// One row of group-level output: the group measures plus the population
/// parameters in effect when they were taken.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantities {
    pub center:        Vec2,
    pub direction:     Vec2,
    pub polarization:  f64,
    pub momentum:      f64,
    pub speed:         f64,
    pub turning_rate:  f64,
    pub radii:         ZoneRadii,
    pub spread:        TraitSpread,
    pub decision_sd:   f64,
    pub is_roo_rising: bool,
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// Final per-agent record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub id:           u32,
    pub position:     Vec2,
    pub heading:      f64,
    pub speed:        f64,
    pub turning_rate: f64,
    pub radii:        ZoneRadii,
    pub front_idx:    usize,
    pub center_idx:   usize,
}
