//! Append-only, day-indexed record of the three tracked fractions.

use epi_agent::Census;
use epi_core::Day;

/// Fractions recorded for one day.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayRecord {
    pub day:      Day,
    /// Infected share of the living population.
    pub infected: f64,
    /// Cumulative deaths over the original population size.
    pub deaths:   f64,
    /// Immune share of the living population.
    pub immune:   f64,
}

impl DayRecord {
    /// Fractions for `census`, with `0 / 0 := 0` once nobody is left alive.
    pub fn from_census(day: Day, census: &Census) -> Self {
        Self {
            day,
            infected: census.infected_fraction(),
            deaths:   census.death_fraction(),
            immune:   census.immune_fraction(),
        }
    }
}

/// The history of one run.  Days are contiguous from `Day(0)`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    records: Vec<DayRecord>,
}

impl HistoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next day's record.
    ///
    /// # Panics
    /// Panics if `record.day` is not the day after the last recorded one.
    pub(crate) fn push(&mut self, record: DayRecord) {
        assert_eq!(
            record.day.index(),
            self.records.len(),
            "history days must be contiguous from day 0"
        );
        self.records.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn get(&self, day: Day) -> Option<&DayRecord> {
        self.records.get(day.index())
    }

    pub fn last(&self) -> Option<&DayRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayRecord> + '_ {
        self.records.iter()
    }

    /// `day → infected fraction`, in day order.
    pub fn infected(&self) -> impl Iterator<Item = (Day, f64)> + '_ {
        self.records.iter().map(|r| (r.day, r.infected))
    }

    /// `day → death fraction`, in day order.
    pub fn deaths(&self) -> impl Iterator<Item = (Day, f64)> + '_ {
        self.records.iter().map(|r| (r.day, r.deaths))
    }

    /// `day → immune fraction`, in day order.
    pub fn immune(&self) -> impl Iterator<Item = (Day, f64)> + '_ {
        self.records.iter().map(|r| (r.day, r.immune))
    }

    /// The day with the highest infected fraction (earliest on ties).
    pub fn peak_infected(&self) -> Option<&DayRecord> {
        self.records
            .iter()
            .reduce(|best, r| if r.infected > best.infected { r } else { best })
    }
}
