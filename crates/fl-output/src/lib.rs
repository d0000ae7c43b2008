//! `fl-output`: simulation output writers for the rust_flock simulator.
//!
//! The CSV backend creates three files in the output directory:
//!
//! | File             | One row per                                             |
//! |------------------|---------------------------------------------------------|
//! | `quantities.csv` | completed sweep level, or the end of an unswept run     |
//! | `state.csv`      | agent, at the end of the run                            |
//! | `snapshots.csv`  | agent per snapshot tick (`output_interval_ticks`)       |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `fl_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fl_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./logs/run"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{QuantitiesRow, SnapshotRow, StateRow};
pub use writer::OutputWriter;
