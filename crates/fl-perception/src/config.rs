//! Run-level perception knobs.  Angles are radians.

use crate::{Perception, PerceptionError, PerceptionResult};

/// Optional settings from which a [`Perception`] is assembled.
///
/// Every field left `None` drops the corresponding stage.  At least one stage
/// must remain.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptionConfig {
    pub view_dist:            Option<f64>,
    pub blind_spot_bisectors: Option<Vec<f64>>,
    pub blind_spot_openings:  Option<Vec<f64>>,
    pub neighbors:            Option<usize>,
    pub outlier_threshold:    Option<f64>,
}

impl PerceptionConfig {
    /// Pair up bisectors and openings.  Both lists must be given together
    /// and have equal length.
    pub fn blind_spots(&self) -> PerceptionResult<Vec<(f64, f64)>> {
        let bisectors = self.blind_spot_bisectors.as_deref().unwrap_or(&[]);
        let openings = self.blind_spot_openings.as_deref().unwrap_or(&[]);
        if bisectors.len() != openings.len() {
            return Err(PerceptionError::BlindSpotMismatch {
                bisectors: bisectors.len(),
                openings:  openings.len(),
            });
        }
        Ok(bisectors.iter().copied().zip(openings.iter().copied()).collect())
    }

    /// `true` if no stage would be built.
    pub fn is_empty(&self) -> bool {
        self.view_dist.is_none()
            && self.blind_spot_bisectors.as_ref().is_none_or(Vec::is_empty)
            && self.neighbors.is_none()
            && self.outlier_threshold.is_none()
    }

    /// Full validation without keeping the result.
    pub fn validate(&self) -> PerceptionResult<()> {
        Perception::from_config(fl_core::Border::unbounded(), self).map(|_| ())
    }
}
