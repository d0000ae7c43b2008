//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, QuantitiesRow, SnapshotRow, StateRow};

/// Sink for the three output tables.
///
/// From the observer's perspective every call is infallible: errors are
/// stored and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Append one group-quantities row.
    fn write_quantities(&mut self, row: &QuantitiesRow) -> OutputResult<()>;

    /// Append the final per-agent state.
    fn write_states(&mut self, rows: &[StateRow]) -> OutputResult<()>;

    /// Append one snapshot's worth of agent poses.
    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
