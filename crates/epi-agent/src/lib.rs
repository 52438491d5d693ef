//! `epi-agent` — agent state machine and population storage for `epi`.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent`, `Health`, `Infection`, `TransmissionSchedule`, `Outcome` |
//! | [`set`]         | `AgentSet`, dense O(1) insert/remove index set            |
//! | [`population`]  | `Population` (agents + partitions), `Census`              |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on the state types.      |

pub mod agent;
pub mod population;
pub mod set;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Health, Infection, MAX_SCHEDULED_ATTEMPTS, Outcome, TransmissionSchedule};
pub use population::{Census, Population};
pub use set::AgentSet;
