//! `epi-sim` — daily outbreak orchestrator for the epi simulator.
//!
//! # Daily loop
//!
//! ```text
//! build:  population → contact network → seed ceil(N / 500) infections
//! for day in 0..config.max_days:
//!   ① Census       — O(1) read of the incrementally maintained partitions.
//!   ② Record       — append {infected, immune, deaths} fractions.
//!   ③ Stability    — stop once two consecutive zero-infection days are
//!                    recorded after day 14.
//!   ④ Transmission — each infected agent picks contacts to expose
//!                    (read-only; parallel with the `parallel` feature),
//!                    then exposures are applied in ascending AgentId order.
//!   ⑤ Progression  — every agent infected at the start of the day advances
//!                    its clock and may resolve.  Agents exposed in ④ wait
//!                    until tomorrow.
//! ```
//!
//! # Transmission modes
//!
//! | `network_size` | Mode                                                  |
//! |----------------|-------------------------------------------------------|
//! | `> 0`          | Static contact network + pre-committed schedules.     |
//! | `0`            | Uniform mixing over the living population.            |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the transmission pass on Rayon's thread pool.     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on history records.  |
//!
//! # Quick-start
//!
//! ```rust
//! use epi_core::{DiseaseParams, OutbreakConfig};
//! use epi_sim::{NoopObserver, OutbreakBuilder};
//!
//! let config = OutbreakConfig::new(DiseaseParams::new(2.5, 0.01, 7), 2_000)
//!     .with_network_size(30)
//!     .with_seed(42);
//! let mut outbreak = OutbreakBuilder::new(config).build().unwrap();
//! let history = outbreak.run(&mut NoopObserver).unwrap();
//! assert!(history.len() <= 365);
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod outbreak;
pub mod stability;
pub mod transmission;


pub use builder::OutbreakBuilder;
pub use error::{SimError, SimResult};
pub use history::{DayRecord, HistoryRecord};
pub use observer::{NoopObserver, OutbreakObserver};
pub use outbreak::{DayOutcome, Outbreak};
pub use stability::StabilityDetector;
pub use transmission::TransmissionMode;
