//! CSV output backend.
//!
//! Creates `history.csv` in the configured output directory with the columns
//! `day,infected,deaths,immune`.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{HistoryRow, OutputResult};

/// File name written inside the output directory.
pub const HISTORY_FILE: &str = "history.csv";

/// Writes an outbreak history to a CSV file.
pub struct CsvWriter {
    history:  Writer<File>,
    path:     PathBuf,
    finished: bool,
}

impl CsvWriter {
    /// Create `history.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(HISTORY_FILE);
        let mut history = Writer::from_path(&path)?;
        history.write_record(["day", "infected", "deaths", "immune"])?;
        Ok(Self { history, path, finished: false })
    }

    /// Path of the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for CsvWriter {
    fn write_day(&mut self, row: &HistoryRow) -> OutputResult<()> {
        self.history.write_record(&[
            row.day.to_string(),
            row.infected.to_string(),
            row.deaths.to_string(),
            row.immune.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        Ok(())
    }
}
