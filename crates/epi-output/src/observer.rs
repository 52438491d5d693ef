//! `OutputObserver<W>` — bridges `OutbreakObserver` to an `OutputWriter`.

use log::warn;

use epi_agent::Census;
use epi_sim::{DayRecord, HistoryRecord, OutbreakObserver};

use crate::writer::OutputWriter;
use crate::{HistoryRow, OutputError, OutputResult};

/// An [`OutbreakObserver`] that streams each recorded day to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After `outbreak.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `outbreak.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Days successfully written so far.
    pub fn days_written(&self) -> usize {
        self.written
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output writer failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> OutbreakObserver for OutputObserver<W> {
    fn on_day_recorded(&mut self, record: &DayRecord, _census: &Census) {
        let result = self.writer.write_day(&HistoryRow::from(record));
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, _history: &HistoryRecord) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
