//! Outbreak observer trait for progress reporting and data collection.

use epi_agent::Census;
use epi_core::Day;

use crate::{DayRecord, HistoryRecord};

/// Callbacks invoked by [`Outbreak::run`][crate::Outbreak::run] at key points
/// in the daily loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u32 }
///
/// impl OutbreakObserver for ProgressPrinter {
///     fn on_day_recorded(&mut self, record: &DayRecord, census: &Census) {
///         if record.day.0 % self.interval == 0 {
///             println!("{}: {} infected", record.day, census.infected);
///         }
///     }
/// }
/// ```
pub trait OutbreakObserver {
    /// Called at the very start of each day, before the census.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called once the day's fractions have been appended to the history.
    fn on_day_recorded(&mut self, _record: &DayRecord, _census: &Census) {}

    /// Called when the stability rule ends the run early.
    fn on_burnout(&mut self, _day: Day) {}

    /// Called once after the final day, with the complete history.
    fn on_run_end(&mut self, _history: &HistoryRecord) {}
}

/// An [`OutbreakObserver`] that does nothing.
pub struct NoopObserver;

impl OutbreakObserver for NoopObserver {}
