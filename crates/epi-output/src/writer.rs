//! The `OutputWriter` trait implemented by day-by-day writers.

use crate::{HistoryRow, OutputResult};

/// Trait implemented by tabular history writers.
///
/// Called from an observer, so errors are stored and retrieved later with
/// [`OutputObserver::take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write one recorded day.
    fn write_day(&mut self, row: &HistoryRow) -> OutputResult<()>;

    /// Write a batch of days in order.
    fn write_days(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
        rows.iter().try_for_each(|row| self.write_day(row))
    }

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
