//! `fl-behavior`: how an agent chooses its next heading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`context`] | `FlockContext<'a>`: frozen tick snapshot shared by all agents     |
//! | [`model`]   | `BehaviorModel` trait                                             |
//! | [`zone`]    | `Zone`, `ZoneModel`: repulsion / orientation / attraction rule    |
//! | [`noop`]    | `NoopBehavior`: agents keep their current heading                 |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                              |
//!
//! # Design notes
//!
//! The two-phase tick loop in fl-sim works as follows:
//!
//! 1. **Decision phase** (optionally parallel): for every agent call
//!    `BehaviorModel::reorient`.  All reads go through `&FlockContext`, which
//!    borrows the agent slice as it was at the start of the tick.
//!
//! 2. **Apply phase** (sequential): turn every agent towards its target,
//!    move it, and wrap it through the border.
//!
//! No agent ever observes another agent's post-tick state during phase 1.

pub mod context;
pub mod error;
pub mod model;
pub mod noop;
pub mod zone;

#[cfg(test)]
mod tests;

pub use context::FlockContext;
pub use error::{BehaviorError, BehaviorResult};
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use zone::{Zone, ZoneModel, ZoneSums};
