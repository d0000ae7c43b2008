//! `fl-core`: foundational types for the `rust_flock` simulator.
//!
//! Geometry, identifiers, random streams and time.  Every other `fl-*` crate
//! builds on these; this one depends only on `rand`, `rand_distr`,
//! `thiserror` and (optionally) `serde`.
//!
//! # Modules
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geom`]        | `Vec2`, angle normalisation, circular mean            |
//! | [`border`]      | `Border`, `BorderKind` (unbounded / clip / periodic)  |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `FlockError`, `FlockResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod border;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use border::{Border, BorderKind};
pub use error::{FlockError, FlockResult};
pub use geom::{NEAR_ZERO, Vec2, angle_diff, circular_mean, normalize_angle};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
