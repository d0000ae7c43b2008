//! Plain data row types written by output backends.

use fl_agent::{Agent, Marker};
use fl_sim::{AgentState, Quantities};

/// Group measures and population parameters at one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantitiesRow {
    pub tick:            u64,
    pub center_x:        f64,
    pub center_y:        f64,
    pub direction_x:     f64,
    pub direction_y:     f64,
    pub polarization:    f64,
    pub momentum:        f64,
    pub speed:           f64,
    pub turning_rate:    f64,
    pub ror:             f64,
    pub roo:             f64,
    pub roa:             f64,
    pub speed_sd:        f64,
    pub turning_rate_sd: f64,
    pub ror_sd:          f64,
    pub roo_sd:          f64,
    pub roa_sd:          f64,
    pub decision_sd:     f64,
    pub is_roo_rising:   bool,
}

impl QuantitiesRow {
    pub const HEADER: [&'static str; 19] = [
        "tick",
        "center_x",
        "center_y",
        "direction_x",
        "direction_y",
        "polarization",
        "momentum",
        "speed",
        "turning_rate",
        "ror",
        "roo",
        "roa",
        "speed_sd",
        "turning_rate_sd",
        "ror_sd",
        "roo_sd",
        "roa_sd",
        "decision_sd",
        "is_roo_rising",
    ];

    pub fn new(tick: u64, q: &Quantities) -> Self {
        Self {
            tick,
            center_x:        q.center.x,
            center_y:        q.center.y,
            direction_x:     q.direction.x,
            direction_y:     q.direction.y,
            polarization:    q.polarization,
            momentum:        q.momentum,
            speed:           q.speed,
            turning_rate:    q.turning_rate,
            ror:             q.radii.ror,
            roo:             q.radii.roo,
            roa:             q.radii.roa,
            speed_sd:        q.spread.speed_sd,
            turning_rate_sd: q.spread.turning_rate_sd,
            ror_sd:          q.spread.ror_sd,
            roo_sd:          q.spread.roo_sd,
            roa_sd:          q.spread.roa_sd,
            decision_sd:     q.decision_sd,
            is_roo_rising:   q.is_roo_rising,
        }
    }
}

/// Final state of one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRow {
    pub id:           u32,
    pub x:            f64,
    pub y:            f64,
    pub heading:      f64,
    pub speed:        f64,
    pub turning_rate: f64,
    pub ror:          f64,
    pub roo:          f64,
    pub roa:          f64,
    /// Rank from the back of the group along its direction.
    pub front_idx:    usize,
    /// Rank from the group centre outwards.
    pub center_idx:   usize,
}

impl StateRow {
    pub const HEADER: [&'static str; 11] = [
        "id", "x", "y", "heading", "speed", "turning_rate", "ror", "roo", "roa", "front_idx", "center_idx",
    ];
}

impl From<&AgentState> for StateRow {
    fn from(s: &AgentState) -> Self {
        Self {
            id:           s.id,
            x:            s.position.x,
            y:            s.position.y,
            heading:      s.heading,
            speed:        s.speed,
            turning_rate: s.turning_rate,
            ror:          s.radii.ror,
            roo:          s.radii.roo,
            roa:          s.radii.roa,
            front_idx:    s.front_idx,
            center_idx:   s.center_idx,
        }
    }
}

/// Pose of one agent at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub tick:      u64,
    pub id:        u32,
    pub x:         f64,
    pub y:         f64,
    pub heading:   f64,
    pub highlight: bool,
}

impl SnapshotRow {
    pub const HEADER: [&'static str; 6] = ["tick", "id", "x", "y", "heading", "highlight"];

    pub fn new(tick: u64, id: u32, agent: &Agent) -> Self {
        Self {
            tick,
            id,
            x:         agent.position.x,
            y:         agent.position.y,
            heading:   agent.heading(),
            highlight: agent.marker == Marker::Highlight,
        }
    }
}
