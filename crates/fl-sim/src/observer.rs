//! Simulation observer trait for progress reporting, drawing, and data
//! collection.

use fl_core::Tick;

use crate::Population;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The population is only ever lent
/// read-only; a renderer can read agent positions, headings and markers from
/// `population.agents`.
///
/// # Example: polarization printer
///
/// ```rust,ignore
/// struct PolarizationPrinter { every: u64 }
///
/// impl SimObserver for PolarizationPrinter {
///     fn on_tick_end(&mut self, tick: Tick, population: &Population) {
///         if tick.0 % self.every == 0 {
///             println!("{tick}: {:.3}", population.stats().polarization);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once every agent has moved.
    fn on_tick_end(&mut self, _tick: Tick, _population: &Population) {}

    /// Called every `output_interval_ticks` ticks (draw hook).
    fn on_snapshot(&mut self, _tick: Tick, _population: &Population) {}

    /// Called on the last tick of a sweep level, before the orientation
    /// radius changes.  `rising` is the sweep direction during that level.
    fn on_level_complete(&mut self, _tick: Tick, _population: &Population, _rising: bool) {}

    /// Called once after the final tick.  `swept` is `true` if an
    /// orientation-radius sweep drove the run.
    fn on_sim_end(&mut self, _final_tick: Tick, _population: &Population, _swept: bool) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
