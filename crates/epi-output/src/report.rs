//! JSON wire format for outbreak results.
//!
//! An outbreak is reported as three day-keyed series:
//!
//! ```json
//! {"infected": {"0": 0.002, "1": 0.0024}, "deaths": {...}, "immune": {...}}
//! ```
//!
//! Day keys are serialized as strings, as JSON requires, and kept in
//! numeric order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use epi_core::{EpiResult, herd_immunity_threshold};
use epi_sim::HistoryRecord;

use crate::OutputResult;

/// Day index → fraction.
pub type DaySeries = BTreeMap<u32, f64>;

/// The three per-day series of one outbreak.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutbreakReport {
    pub infected: DaySeries,
    pub deaths:   DaySeries,
    pub immune:   DaySeries,
}

impl OutbreakReport {
    pub fn from_history(history: &HistoryRecord) -> Self {
        let mut report = Self::default();
        for r in history.iter() {
            report.infected.insert(r.day.0, r.infected);
            report.deaths.insert(r.day.0, r.deaths);
            report.immune.insert(r.day.0, r.immune);
        }
        report
    }

    /// Number of recorded days.
    pub fn days(&self) -> usize {
        self.infected.len()
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> OutputResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Response body for a herd-immunity query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HerdImmunityReport {
    #[serde(rename = "R0")]
    pub r0:                      f64,
    pub herd_immunity_threshold: f64,
}

impl HerdImmunityReport {
    /// Fails for `r0 <= 0` or a non-finite `r0`.
    pub fn new(r0: f64) -> EpiResult<Self> {
        Ok(Self { r0, herd_immunity_threshold: herd_immunity_threshold(r0)? })
    }
}
