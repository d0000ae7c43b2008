//! `fl-sim`: population, statistics, configuration and tick loop for the
//! rust_flock simulator.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`population`] | `Population`: agents, placement, two-phase tick, `set_roo`   |
//! | [`stats`]      | `GroupStats`, `Quantities`, `AgentState`                     |
//! | [`config`]     | `FlockConfig`, `BorderConfig`, `PopulationConfig`, `TickBudget` |
//! | [`builder`]    | `SimBuilder`                                                 |
//! | [`sim`]        | `Sim`: the fixed-step loop driving population and sweep      |
//! | [`observer`]   | `SimObserver`, `NoopObserver`                                |
//! | [`error`]      | `SimError`, `SimResult<T>`                                   |
//!
//! # Two-phase tick
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Decide: BehaviorModel::reorient for every agent against the frozen
//!              agent slice (parallel with the `parallel` feature).
//!   ② Apply:  for every agent in id order, turn_to(target), move, wrap.
//!   ③ Sweep:  on a level boundary, on_level_complete, then set_roo.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon's thread pool.          |
//! | `serde`    | Serialize/Deserialize on configuration and output types. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fl_sim::{FlockConfig, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::from_config(FlockConfig::default())?.build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{}", sim.population.stats());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod population;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::{BorderConfig, FlockConfig, PopulationConfig, TickBudget};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use population::{ACCENT_COUNT, MAX_PLACEMENT_ATTEMPTS, Population};
pub use sim::Sim;
pub use stats::{AgentState, GroupStats, Quantities};
