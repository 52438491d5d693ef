//! `epi-core` — foundational types for the `epi` outbreak simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Day`                                                 |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`params`]      | `DiseaseParams`, `herd_immunity_threshold`            |
//! | [`config`]      | `OutbreakConfig`, `NetworkSampling`                   |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `epi-output` and JSON configuration files.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_MAX_DAYS, NetworkSampling, OutbreakConfig};
pub use error::{EpiError, EpiResult};
pub use ids::AgentId;
pub use params::{DEFAULT_ILLNESS_LENGTH, DiseaseParams, herd_immunity_threshold};
pub use rng::{AgentRng, SimRng};
pub use time::Day;
