//! `fl-sweep`: stepped triangular sweep of a scalar parameter.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`incrementor`] | `Incrementor`: the level/plateau state machine         |
//! | [`config`]      | `SweepConfig`, `inf:inc:sup` range parsing             |
//! | [`error`]       | `SweepError`, `SweepResult<T>`                         |
//!
//! # Waveform
//!
//! ```text
//! value
//!   ▲            ┌──┐
//!   │         ┌──┘  └──┐
//!   │      ┌──┘        └──┐
//!   │   ───┘              └───
//!   └──────────────────────────→ tick
//!     inf   each plateau lasts step_duration ticks
//! ```
//!
//! The sweep climbs from `inf_bound` by `increment` until the last level
//! strictly below `sup_bound`, then descends symmetrically back to
//! `inf_bound`.  One plateau is called a *level*.

pub mod config;
pub mod error;
pub mod incrementor;

#[cfg(test)]
mod tests;

pub use config::SweepConfig;
pub use error::{SweepError, SweepResult};
pub use incrementor::Incrementor;
