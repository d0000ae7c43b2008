//! The sweep state machine.

use crate::{SweepError, SweepResult};

/// Steps a value from `inf_bound` up towards `sup_bound` and back down, one
/// level every `step_duration` calls to [`next`](Self::next).
///
/// `sup_bound` is exclusive: the direction flips on the last level that is
/// still below it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Incrementor {
    inf_bound:     f64,
    sup_bound:     f64,
    /// Signed; positive while rising.
    increment:     f64,
    step_duration: u64,
    stepper:       f64,
    count:         u64,
}

impl Incrementor {
    pub fn new(inf_bound: f64, increment: f64, sup_bound: f64, step_duration: u64) -> SweepResult<Self> {
        if !(inf_bound.is_finite() && sup_bound.is_finite() && sup_bound > inf_bound) {
            return Err(SweepError::InvalidBounds { inf: inf_bound, sup: sup_bound });
        }
        if !(increment.is_finite() && increment > 0.0) {
            return Err(SweepError::InvalidIncrement(increment));
        }
        if step_duration == 0 {
            return Err(SweepError::ZeroStepDuration);
        }
        Ok(Self {
            inf_bound,
            sup_bound,
            increment,
            step_duration,
            stepper: inf_bound,
            count: 0,
        })
    }

    /// Current level.
    #[inline]
    pub fn value(&self) -> f64 {
        self.stepper
    }

    /// `true` if the next call to [`next`](Self::next) ends the current level.
    #[inline]
    pub fn will_change(&self) -> bool {
        self.count + 1 == self.step_duration
    }

    #[inline]
    pub fn is_rising(&self) -> bool {
        self.increment > 0.0
    }

    /// Advance one tick and return the level now in effect.
    pub fn next(&mut self) -> f64 {
        self.count += 1;
        if self.count == self.step_duration {
            self.count = 0;
            self.stepper += self.increment;
            if self.stepper >= self.sup_bound - self.increment {
                self.increment = -self.increment;
            }
            self.stepper = self.stepper.max(self.inf_bound);
        }
        self.stepper
    }

    /// Number of levels in a full up-and-down sweep.
    pub fn level_count(&self) -> u64 {
        let climbs = ((self.sup_bound - self.inf_bound) / self.increment.abs()).ceil() as u64;
        (climbs * 2).saturating_sub(1)
    }

    /// Ticks needed to traverse the whole sweep once.
    pub fn total_ticks(&self) -> u64 {
        self.level_count() * self.step_duration
    }

    /// Magnitude of one level step.
    pub fn step(&self) -> f64 {
        self.increment.abs()
    }
}
