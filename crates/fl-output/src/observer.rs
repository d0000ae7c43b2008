//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use fl_core::Tick;
use fl_sim::{Population, SimObserver};
use tracing::warn;

use crate::row::{QuantitiesRow, SnapshotRow, StateRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records group quantities, the final state, and
/// periodic pose snapshots to any [`OutputWriter`].
///
/// - every completed sweep level → one quantities row (`is_roo_rising` from
///   the level just finished);
/// - end of run → one final quantities row if no sweep ran, then one state
///   row per agent, then `finish`;
/// - every snapshot tick → one pose row per agent.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        let rows: Vec<SnapshotRow> = population
            .agents
            .iter()
            .enumerate()
            .map(|(i, a)| SnapshotRow::new(tick.0, i as u32, a))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_level_complete(&mut self, tick: Tick, population: &Population, rising: bool) {
        let row = QuantitiesRow::new(tick.0, &population.quantities(rising));
        let result = self.writer.write_quantities(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick, population: &Population, swept: bool) {
        if !swept {
            let row = QuantitiesRow::new(final_tick.0, &population.quantities(false));
            let result = self.writer.write_quantities(&row);
            self.store_err(result);
        }

        let rows: Vec<StateRow> = population.final_state().iter().map(StateRow::from).collect();
        let result = self.writer.write_states(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
