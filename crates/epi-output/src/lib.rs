//! `epi-output` — output writers, the JSON report format, and run storage.
//!
//! | Feature   | Backend         | Files created                    |
//! |-----------|-----------------|----------------------------------|
//! | *(none)*  | CSV history     | `history.csv`                    |
//! | *(none)*  | JSON run store  | `<run-id>.json` per stored run   |
//! | `sqlite`  | SQLite store    | caller-chosen database file      |
//!
//! Day-by-day writers implement [`OutputWriter`] and are driven by
//! [`OutputObserver`], which implements `epi_sim::OutbreakObserver`.
//! Completed runs are converted to an [`OutbreakReport`] and persisted through
//! a [`RunStore`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, JsonRunStore, OutbreakReport, OutputObserver, RunStore, StoredRun};
//!
//! let mut obs = OutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! let history = outbreak.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//!
//! let mut store = JsonRunStore::open("./runs")?;
//! let id = store.save(&StoredRun::new(config, OutbreakReport::from_history(&history)))?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod store;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use report::{HerdImmunityReport, OutbreakReport};
pub use row::HistoryRow;
pub use store::{JsonRunStore, RunId, RunStore, StoredRun};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRunStore;
