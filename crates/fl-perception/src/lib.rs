//! `fl-perception`: which neighbours an agent can see.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`stage`]     | `Stage` tagged union and the four filter rules                |
//! | [`pipeline`]  | `Perception` (ordered stages + border), `PerceptionBuilder`   |
//! | [`config`]    | `PerceptionConfig`: the optional knobs a run supplies         |
//! | [`error`]     | `PerceptionError`, `PerceptionResult<T>`                      |
//!
//! # Narrowing order
//!
//! ```text
//! all agents except self
//!   → Range(max_dist)              raw distance
//!   → BlindSpot(bisector, opening)  zero or more blind cones
//!   → Knn(k)                        cardinality
//!   → Outlier(threshold)            behavioural anomaly
//! ```
//!
//! Each stage sees only what the previous one kept and never adds an agent
//! back.  The builder enforces the order regardless of the order in which
//! stages are declared.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod stage;


pub use config::PerceptionConfig;
pub use error::{PerceptionError, PerceptionResult};
pub use pipeline::{Perception, PerceptionBuilder};
pub use stage::Stage;
