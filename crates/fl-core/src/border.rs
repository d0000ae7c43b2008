//! Border policies: how displacement between two points is measured and how a
//! position is brought back into the domain after a move.
//!
//! | Kind        | `vector(from, to)`               | `wrap(p)`                          |
//! |-------------|----------------------------------|------------------------------------|
//! | `Unbounded` | `to − from`                      | identity                           |
//! | `Clip`      | `to − from`                      | clamp into `origin ± length/2`     |
//! | `Periodic`  | shortest image on the torus      | modular reduction around `origin`  |
//!
//! A `Border` is built once per run and never mutated; it is `Copy` so the
//! perception pipeline and the population can each hold their own copy.

use std::str::FromStr;

use crate::{FlockError, FlockResult, Vec2};

/// Which topology the domain has.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BorderKind {
    /// No edges; `length` is ignored.
    #[default]
    Unbounded,
    /// Rectangular wall: positions are clamped onto the rectangle.
    Clip,
    /// Toroidal world: leaving one side re-enters on the opposite side.
    Periodic,
}

impl BorderKind {
    /// Label used on the command line and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            BorderKind::Unbounded => "none",
            BorderKind::Clip      => "clip",
            BorderKind::Periodic  => "wrap",
        }
    }
}

impl std::fmt::Display for BorderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderKind {
    type Err = FlockError;

    fn from_str(s: &str) -> FlockResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "unbounded" | "infinite" => Ok(BorderKind::Unbounded),
            "clip" | "wall"                   => Ok(BorderKind::Clip),
            "wrap" | "periodic" | "toric"     => Ok(BorderKind::Periodic),
            other => Err(FlockError::UnknownBorder(other.to_owned())),
        }
    }
}

/// Geometry policy of the simulated domain.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub kind:   BorderKind,
    /// Centre of the domain.
    pub origin: Vec2,
    /// Full extent of the domain along each axis.  Unused when unbounded.
    pub length: Vec2,
}

impl Border {
    /// Border without edges.
    pub fn unbounded() -> Self {
        Self { kind: BorderKind::Unbounded, origin: Vec2::ZERO, length: Vec2::ZERO }
    }

    /// Rectangular clipping border of the given extent, centred on the origin.
    pub fn clip(length: Vec2) -> Self {
        Self { kind: BorderKind::Clip, origin: Vec2::ZERO, length }
    }

    /// Toroidal border of the given extent, centred on the origin.
    pub fn periodic(length: Vec2) -> Self {
        Self { kind: BorderKind::Periodic, origin: Vec2::ZERO, length }
    }

    /// Move the domain centre.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Checked constructor.
    ///
    /// Rejects negative or non-finite extents, and zero extents on a periodic
    /// border (a period of zero has no meaningful torus).
    pub fn try_new(kind: BorderKind, origin: Vec2, length: Vec2) -> FlockResult<Self> {
        let finite = length.x.is_finite() && length.y.is_finite();
        if !finite || length.x < 0.0 || length.y < 0.0 {
            return Err(FlockError::InvalidExtent(length));
        }
        if kind == BorderKind::Periodic && (length.x == 0.0 || length.y == 0.0) {
            return Err(FlockError::ZeroPeriod(length));
        }
        Ok(Self { kind, origin, length })
    }

    /// Bring `point` back into the canonical representation of the domain.
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        match self.kind {
            BorderKind::Unbounded => point,
            BorderKind::Clip => {
                let half = self.length * 0.5;
                point.clamp(self.origin - half, self.origin + half)
            }
            BorderKind::Periodic => wrap_centered(self.origin, point, self.length),
        }
    }

    /// Displacement from `from` to `to` consistent with the topology.
    ///
    /// For the periodic kind each axis lies in `(-length/2, length/2]`.
    pub fn vector(&self, from: Vec2, to: Vec2) -> Vec2 {
        match self.kind {
            BorderKind::Unbounded | BorderKind::Clip => to - from,
            BorderKind::Periodic => {
                let d = wrap_centered(from, to, self.length) - from;
                Vec2::new(
                    flip_lower_edge(d.x, self.length.x),
                    flip_lower_edge(d.y, self.length.y),
                )
            }
        }
    }

    /// `|vector(from, to)|`.
    #[inline]
    pub fn distance(&self, from: Vec2, to: Vec2) -> f64 {
        self.vector(from, to).norm()
    }

    /// Lower corner of the domain rectangle (meaningless when unbounded).
    pub fn min_corner(&self) -> Vec2 {
        self.origin - self.length * 0.5
    }

    /// Upper corner of the domain rectangle (meaningless when unbounded).
    pub fn max_corner(&self) -> Vec2 {
        self.origin + self.length * 0.5
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Reduce `point` into `[center − period/2, center + period/2)` per axis.
fn wrap_centered(center: Vec2, point: Vec2, period: Vec2) -> Vec2 {
    Vec2::new(
        wrap_axis(center.x, point.x, period.x),
        wrap_axis(center.y, point.y, period.y),
    )
}

fn wrap_axis(center: f64, value: f64, period: f64) -> f64 {
    if period <= 0.0 {
        return value;
    }
    let half = period * 0.5;
    let (lo, hi) = (center - half, center + half);
    if (lo..hi).contains(&value) {
        return value;
    }
    let out = lo + (value - lo).rem_euclid(period);
    // Rounding can land exactly on the open upper edge.
    if (lo..hi).contains(&out) { out } else { lo }
}

/// Map the `-period/2` representative onto `+period/2`.
#[inline]
fn flip_lower_edge(d: f64, period: f64) -> f64 {
    if period > 0.0 && d <= -period * 0.5 { d + period } else { d }
}
