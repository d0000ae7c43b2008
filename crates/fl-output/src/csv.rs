//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `quantities.csv`
//! - `state.csv`
//! - `snapshots.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, QuantitiesRow, SnapshotRow, StateRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    quantities: Writer<File>,
    states:     Writer<File>,
    snapshots:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut quantities = Writer::from_path(dir.join("quantities.csv"))?;
        quantities.write_record(QuantitiesRow::HEADER)?;

        let mut states = Writer::from_path(dir.join("state.csv"))?;
        states.write_record(StateRow::HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record(SnapshotRow::HEADER)?;

        Ok(Self { quantities, states, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_quantities(&mut self, row: &QuantitiesRow) -> OutputResult<()> {
        self.quantities.write_record(&[
            row.tick.to_string(),
            row.center_x.to_string(),
            row.center_y.to_string(),
            row.direction_x.to_string(),
            row.direction_y.to_string(),
            row.polarization.to_string(),
            row.momentum.to_string(),
            row.speed.to_string(),
            row.turning_rate.to_string(),
            row.ror.to_string(),
            row.roo.to_string(),
            row.roa.to_string(),
            row.speed_sd.to_string(),
            row.turning_rate_sd.to_string(),
            row.ror_sd.to_string(),
            row.roo_sd.to_string(),
            row.roa_sd.to_string(),
            row.decision_sd.to_string(),
            (row.is_roo_rising as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_states(&mut self, rows: &[StateRow]) -> OutputResult<()> {
        for row in rows {
            self.states.write_record(&[
                row.id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.to_string(),
                row.speed.to_string(),
                row.turning_rate.to_string(),
                row.ror.to_string(),
                row.roo.to_string(),
                row.roa.to_string(),
                row.front_idx.to_string(),
                row.center_idx.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[SnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.to_string(),
                (row.highlight as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.quantities.flush()?;
        self.states.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
