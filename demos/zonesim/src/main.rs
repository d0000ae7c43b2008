//! zonesim: command-line driver for the rust_flock zone-model simulator.
//!
//! Builds a [`FlockConfig`] from the flags below, runs the simulation to
//! completion, and writes `quantities.csv`, `state.csv`, and `snapshots.csv`
//! to `--output`.  Angles are given in degrees on the command line and
//! converted to radians here.
//!
//! ```text
//! zonesim -n 100 --border wrap --size 200x200 --roo-var 1:1:12 --roo-step-duration 500
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fl_agent::{TraitSpread, ZoneRadii};
use fl_core::{BorderKind, Vec2};
use fl_output::{CsvWriter, SimOutputObserver};
use fl_perception::PerceptionConfig;
use fl_sim::{BorderConfig, FlockConfig, PopulationConfig, SimBuilder, TickBudget};
use fl_sweep::SweepConfig;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "zonesim")]
#[command(version)]
#[command(about = "Zone-based collective motion simulator", long_about = None)]
struct Cli {
    /// Number of agents (including the highlighted one)
    #[arg(short = 'n', default_value_t = 60)]
    n: usize,

    /// Domain border: none, clip, or wrap
    #[arg(long, default_value = "clip")]
    border: BorderKind,

    /// Domain extent as WIDTHxHEIGHT, centred on the origin
    #[arg(long, value_name = "WxH", default_value = "100x100", value_parser = parse_size)]
    size: Vec2,

    /// Radius of repulsion
    #[arg(long, default_value_t = 1.0)]
    ror: f64,

    /// Radius of orientation (ignored when --roo-var is given)
    #[arg(long, default_value_t = 5.0)]
    roo: f64,

    /// Radius of attraction
    #[arg(long, default_value_t = 10.0)]
    roa: f64,

    /// Sweep the orientation radius as INF:INC:SUP
    #[arg(long, value_name = "INF:INC:SUP")]
    roo_var: Option<SweepConfig>,

    /// Ticks spent on each sweep level
    #[arg(long, value_name = "TICKS")]
    roo_step_duration: Option<u64>,

    /// Maximum view distance; 0 disables the range stage
    #[arg(long, default_value_t = 20.0)]
    view_dist: f64,

    /// Bisector of each blind spot, degrees relative to the heading
    #[arg(long = "blindspot-direction", short = 'd', num_args = 1.., allow_negative_numbers = true)]
    blindspot_direction: Vec<f64>,

    /// Opening of each blind spot, degrees
    #[arg(long = "blindspot-opening", short = 'o', num_args = 1..)]
    blindspot_opening: Vec<f64>,

    /// Keep only the COUNT nearest visible neighbours
    #[arg(long, value_name = "COUNT")]
    count: Option<usize>,

    /// Enable the outlier stage: only the neighbour whose heading deviates
    /// most from the local mean is seen (threshold in degrees)
    #[arg(long, value_name = "DEGREES")]
    diff_threshold: Option<f64>,

    /// Mean speed, distance units per second
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Mean turning rate, degrees per second
    #[arg(long, default_value_t = 90.0)]
    turning_rate: f64,

    /// Standard deviation of the heading decision noise, degrees
    #[arg(long, default_value_t = 0.0)]
    decision_sd: f64,

    #[arg(long, default_value_t = 0.0)]
    speed_sd: f64,

    /// Degrees per second
    #[arg(long, default_value_t = 0.0)]
    turning_rate_sd: f64,

    #[arg(long, default_value_t = 0.0)]
    ror_sd: f64,

    #[arg(long, default_value_t = 0.0)]
    roo_sd: f64,

    #[arg(long, default_value_t = 0.0)]
    roa_sd: f64,

    /// Seconds per tick
    #[arg(long, default_value_t = 0.1)]
    time_step: f64,

    /// Number of ticks; defaults to the sweep length, or 1000 without a sweep
    #[arg(long)]
    steps: Option<u64>,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Place one highlighted agent at the origin
    #[arg(long)]
    highlight: bool,

    /// Snapshot period in ticks; 0 disables snapshots
    #[arg(long, default_value_t = 0)]
    snapshot_interval: u64,

    /// Output directory
    #[arg(long, default_value = "logs")]
    output: PathBuf,
}

fn parse_size(s: &str) -> Result<Vec2, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(Vec2::new(w, h))
}

fn degrees(values: &[f64]) -> Option<Vec<f64>> {
    (!values.is_empty()).then(|| values.iter().map(|d| d.to_radians()).collect())
}

// ── Config assembly ───────────────────────────────────────────────────────────

impl Cli {
    fn flock_config(&self) -> Result<FlockConfig> {
        if self.roo_step_duration.is_some() && self.roo_var.is_none() {
            bail!("--roo-step-duration requires --roo-var");
        }

        let sweep = self.roo_var.map(|range| match self.roo_step_duration {
            Some(ticks) => range.with_step_duration(ticks),
            None => range,
        });

        let ticks = match (self.steps, sweep.is_some()) {
            (Some(n), _) => TickBudget::Fixed(n),
            (None, true) => TickBudget::FromSweep,
            (None, false) => TickBudget::Fixed(1_000),
        };

        let perception = PerceptionConfig {
            view_dist:            (self.view_dist > 0.0).then_some(self.view_dist),
            blind_spot_bisectors: degrees(&self.blindspot_direction),
            blind_spot_openings:  degrees(&self.blindspot_opening),
            neighbors:            self.count,
            outlier_threshold:    self.diff_threshold.map(f64::to_radians),
        };

        let population = PopulationConfig {
            count:        self.n,
            speed:        self.speed,
            turning_rate: self.turning_rate.to_radians(),
            radii:        ZoneRadii::new(self.ror, self.roo, self.roa),
            spread:       TraitSpread {
                speed_sd:        self.speed_sd,
                turning_rate_sd: self.turning_rate_sd.to_radians(),
                ror_sd:          self.ror_sd,
                roo_sd:          self.roo_sd,
                roa_sd:          self.roa_sd,
            },
            decision_sd:  self.decision_sd.to_radians(),
        };

        Ok(FlockConfig {
            border: BorderConfig { kind: self.border, origin: Vec2::ZERO, length: self.size },
            perception,
            population,
            sweep,
            ticks,
            dt: self.time_step,
            seed: self.seed,
            output_interval_ticks: self.snapshot_interval,
            highlight: self.highlight,
        })
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.flock_config()?;

    let mut sim = SimBuilder::from_config(config)
        .context("invalid configuration")?
        .build()
        .context("failed to build simulation")?;

    let writer = CsvWriter::new(&cli.output)
        .with_context(|| format!("cannot open output directory {}", cli.output.display()))?;
    let mut observer = SimOutputObserver::new(writer);

    let started = Instant::now();
    sim.run(&mut observer)?;

    if let Some(e) = observer.take_error() {
        return Err(e).context("writing simulation output");
    }

    let stats = sim.population.stats();
    info!(
        elapsed_ms   = started.elapsed().as_millis() as u64,
        polarization = stats.polarization,
        momentum     = stats.momentum,
        output       = %cli.output.display(),
        "done"
    );
    Ok(())
}
