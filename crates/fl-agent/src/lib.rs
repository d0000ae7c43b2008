//! `fl-agent`: the simulated individual and how individuals are drawn.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`agent`]      | `Agent` (kinematics), `ZoneRadii`, `Marker`                 |
//! | [`template`]   | `AgentTemplate`, `TraitSpread`, `AgentTraits`               |
//! | [`store`]      | `AgentRngs` (one deterministic RNG per agent)               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod agent;
pub mod store;
pub mod template;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Marker, ZoneRadii};
pub use store::AgentRngs;
pub use template::{AgentTemplate, AgentTraits, TraitSpread};
