//! Plain data row types written by output backends.

use epi_sim::DayRecord;

/// One recorded day, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRow {
    pub day:      u32,
    /// Infected share of the living population.
    pub infected: f64,
    /// Dead share of the original population.
    pub deaths:   f64,
    /// Recovered share of the living population.
    pub immune:   f64,
}

impl From<&DayRecord> for HistoryRow {
    fn from(r: &DayRecord) -> Self {
        Self { day: r.day.0, infected: r.infected, deaths: r.deaths, immune: r.immune }
    }
}
