//! The `Sim` struct and its tick loop.

use fl_behavior::BehaviorModel;
use fl_core::{SimClock, SimConfig, Tick};
use fl_sweep::Incrementor;
use tracing::{debug, info, trace};

use crate::{Population, SimObserver, SimResult};

/// The main simulation runner.
///
/// Each tick:
///
/// 1. **Population tick**: decide every heading from a frozen snapshot, then
///    turn, move and wrap every agent.
/// 2. **Snapshot**: every `output_interval_ticks` ticks.
/// 3. **Sweep** (if configured): on the last tick of a level report
///    `on_level_complete`, then advance the incrementor and apply the
///    orientation radius now in effect.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Resolved loop parameters (dt, total ticks, seed, snapshot period).
    pub config: SimConfig,

    pub clock: SimClock,

    pub population: Population,

    /// The reorientation rule.  Called once per agent per tick.
    pub behavior: B,

    /// Orientation-radius sweep, if any.
    pub sweep: Option<Incrementor>,
}

impl<B: BehaviorModel> Sim<B> {
    /// Run from the current tick to `config.end_tick()`, then call
    /// `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        let end = self.clock.current_tick;
        info!(
            tick = end.0,
            elapsed_secs = self.clock.elapsed_secs(),
            polarization = self.population.stats().polarization,
            "simulation finished"
        );
        observer.on_sim_end(end, &self.population, self.sweep.is_some());
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// and does not call `on_sim_end`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// `true` once the configured tick budget is spent.
    pub fn is_finished(&self) -> bool {
        self.clock.current_tick >= self.config.end_tick()
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        trace!(tick = now.0, "tick");

        observer.on_tick_start(now);
        self.population.tick(now, self.config.dt, &self.behavior);
        observer.on_tick_end(now, &self.population);

        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.population);
        }

        self.advance_sweep(now, observer);
        self.clock.advance();
    }

    fn advance_sweep<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let Some(sweep) = self.sweep.as_mut() else {
            return;
        };
        if sweep.will_change() {
            let rising = sweep.is_rising();
            observer.on_level_complete(now, &self.population, rising);
            let roo = sweep.next();
            debug!(tick = now.0, roo, rising = sweep.is_rising(), "sweep level change");
            self.population.set_roo(roo);
        } else {
            sweep.next();
        }
    }
}
