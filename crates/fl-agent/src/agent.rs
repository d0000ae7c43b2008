//! A single point-like agent: position, heading, and kinematic limits.
//!
//! Integration is explicit Euler.  The only mutators are [`Agent::turn_by`],
//! [`Agent::turn_to`], [`Agent::tick`] and direct position writes by the
//! population after a border wrap.

use fl_core::{Vec2, angle_diff, normalize_angle};

/// Personal interaction radii.
///
/// `ror ≤ roo ≤ roa` by convention; nothing enforces it, and under trait noise
/// an agent may legitimately end up with overlapping zones.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneRadii {
    /// Radius of repulsion.
    pub ror: f64,
    /// Radius of orientation.
    pub roo: f64,
    /// Radius of attraction.
    pub roa: f64,
}

impl ZoneRadii {
    pub const fn new(ror: f64, roo: f64, roa: f64) -> Self {
        Self { ror, roo, roa }
    }
}

/// Visual tag read by draw hooks.  Has no effect on the dynamics.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// Ordinary agent; the payload indexes the renderer's accent palette.
    Regular(u8),
    /// The single agent singled out for tracking.
    Highlight,
}

impl Default for Marker {
    fn default() -> Self {
        Marker::Regular(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub position:     Vec2,
    /// Orientation in `[-π, π)`.
    heading:          f64,
    /// Length units per second.
    pub speed:        f64,
    /// Maximum angular speed, radians per second.
    pub turning_rate: f64,
    pub radii:        ZoneRadii,
    pub marker:       Marker,
}

impl Agent {
    pub fn new(position: Vec2, heading: f64, speed: f64, turning_rate: f64, radii: ZoneRadii) -> Self {
        Self {
            position,
            heading: normalize_angle(heading),
            speed,
            turning_rate,
            radii,
            marker: Marker::default(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Unit vector along the heading.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.direction() * self.speed
    }

    /// Rotate by `delta`, limited to `±turning_rate · dt`.
    pub fn turn_by(&mut self, delta: f64, dt: f64) {
        let max_turn = self.turning_rate * dt;
        self.heading = normalize_angle(self.heading + delta.clamp(-max_turn, max_turn));
    }

    /// Rotate towards `target` along the shorter arc, rate-limited.
    pub fn turn_to(&mut self, target: f64, dt: f64) {
        self.turn_by(angle_diff(target, self.heading), dt);
    }

    /// Advance the position by one step of `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.position += self.velocity() * dt;
    }
}
