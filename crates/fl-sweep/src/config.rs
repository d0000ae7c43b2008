//! Sweep settings as a run supplies them.

use std::str::FromStr;

use crate::{Incrementor, SweepError, SweepResult};

/// Bounds and pacing of an orientation-radius sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    pub inf_bound:     f64,
    pub increment:     f64,
    pub sup_bound:     f64,
    /// Ticks per level.  Required before an [`Incrementor`] can be built.
    pub step_duration: Option<u64>,
}

impl SweepConfig {
    /// Parse `"inf:inc:sup"`, e.g. `"1:0.5:10"`.
    pub fn parse_range(s: &str) -> SweepResult<Self> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [inf, inc, sup] = parts.as_slice() else {
            return Err(SweepError::Parse(format!(
                "expected 'inf:inc:sup', got '{s}'"
            )));
        };
        let num = |field: &str, v: &str| {
            v.parse::<f64>()
                .map_err(|e| SweepError::Parse(format!("{field} '{v}': {e}")))
        };
        Ok(Self {
            inf_bound:     num("inf", *inf)?,
            increment:     num("inc", *inc)?,
            sup_bound:     num("sup", *sup)?,
            step_duration: None,
        })
    }

    pub fn with_step_duration(mut self, ticks: u64) -> Self {
        self.step_duration = Some(ticks);
        self
    }

    /// Validate and construct the state machine.
    pub fn build(&self) -> SweepResult<Incrementor> {
        let step_duration = self.step_duration.ok_or(SweepError::MissingStepDuration)?;
        Incrementor::new(self.inf_bound, self.increment, self.sup_bound, step_duration)
    }
}

impl FromStr for SweepConfig {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_range(s)
    }
}
