//! Fixed-step time.
//!
//! A run is a sequence of integer [`Tick`]s; each one advances simulated time
//! by `dt` seconds, so `elapsed = tick * dt`.  Sweep levels and snapshot
//! periods count ticks, only the kinematics see `dt`.

use std::fmt;

/// Index of one simulation step, starting at zero.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Simulated seconds at the start of this tick.
    #[inline]
    pub fn seconds(self, dt: f64) -> f64 {
        self.0 as f64 * dt
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The loop's position in time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    pub dt: f64,
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(dt: f64) -> Self {
        Self { dt, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.seconds(self.dt)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Loop parameters once the tick budget is resolved.
///
/// Built by `fl-sim`'s `FlockConfig::sim_config`, which derives
/// `total_ticks` from the orientation-radius sweep when asked to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.
    pub dt: f64,
    pub total_ticks: u64,
    /// Seeds placement, trait sampling and every per-agent stream.
    pub seed: u64,
    /// Snapshot period in ticks; `0` disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// First tick that is not simulated.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Whether `tick` falls on the snapshot period.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0.is_multiple_of(self.output_interval_ticks)
    }

    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt)
    }
}
