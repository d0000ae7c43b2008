//! Planar vector type and angle utilities.
//!
//! All angles are in radians.  Headings are kept in the half-open interval
//! `[-π, π)` by [`normalize_angle`]; every module that stores an angle goes
//! through it so comparisons never have to special-case `π` vs `-π`.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Magnitude below which a vector is treated as the zero vector.
pub const NEAR_ZERO: f64 = 1e-9;

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D vector / point in simulation length units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle`.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3-D cross product `self × other`.
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the X axis, in `(-π, π]` (plain `atan2`).
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn is_near_zero(self) -> bool {
        self.norm() < NEAR_ZERO
    }

    /// Unit vector with the same direction.  A near-zero vector is returned
    /// unchanged rather than blowing up into NaNs.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        let n = self.norm();
        if n < NEAR_ZERO { self } else { self / n }
    }

    /// Componentwise clamp into the box `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Vec2 {
        iter.fold(Vec2::ZERO, Add::add)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

// ── Angles ────────────────────────────────────────────────────────────────────

/// Map any finite angle into `[-π, π)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid may round up to exactly TAU for tiny negative inputs.
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Signed shortest rotation taking `current` onto `target`, in `[-π, π)`.
#[inline]
pub fn angle_diff(target: f64, current: f64) -> f64 {
    normalize_angle(target - current)
}

/// Circular mean of a set of angles, normalised into `[-π, π)`.
///
/// Returns `None` for an empty set.  When the unit vectors cancel exactly the
/// mean is ill-defined; `atan2(0, 0)` yields `0.0` and that is what callers get.
pub fn circular_mean(angles: &[f64]) -> Option<f64> {
    if angles.is_empty() {
        return None;
    }
    let sum: Vec2 = angles.iter().map(|&a| Vec2::from_angle(a)).sum();
    Some(normalize_angle(sum.angle()))
}
