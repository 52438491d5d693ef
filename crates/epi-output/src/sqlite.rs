//! SQLite run store (feature `sqlite`).
//!
//! One `runs` table; parameters and results are stored as JSON text.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use crate::{OutputError, OutputResult, RunId, RunStore, StoredRun};

/// Stores runs in an SQLite database.
pub struct SqliteRunStore {
    conn: Connection,
}

impl SqliteRunStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> OutputResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// A store that lives only as long as the returned value.
    pub fn in_memory() -> OutputResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> OutputResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS runs (
                 id         TEXT PRIMARY KEY,
                 timestamp  INTEGER NOT NULL,
                 parameters TEXT NOT NULL,
                 results    TEXT NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }
}

impl RunStore for SqliteRunStore {
    fn save(&mut self, run: &StoredRun) -> OutputResult<RunId> {
        let id = RunId::new_v4();
        self.conn.execute(
            "INSERT INTO runs (id, timestamp, parameters, results) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                id.to_string(),
                run.timestamp as i64,
                serde_json::to_string(&run.parameters)?,
                serde_json::to_string(&run.results)?,
            ],
        )?;
        Ok(id)
    }

    fn load(&self, id: RunId) -> OutputResult<StoredRun> {
        let row: Option<(i64, String, String)> = self
            .conn
            .query_row(
                "SELECT timestamp, parameters, results FROM runs WHERE id = ?1",
                [id.to_string()],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .optional()?;
        let (timestamp, parameters, results) = row.ok_or(OutputError::NotFound(id))?;
        Ok(StoredRun {
            parameters: serde_json::from_str(&parameters)?,
            results:    serde_json::from_str(&results)?,
            timestamp:  timestamp as u64,
        })
    }

    fn list(&self) -> OutputResult<Vec<RunId>> {
        let mut stmt = self.conn.prepare("SELECT id FROM runs")?;
        let mut ids = stmt
            .query_map([], |r| r.get::<_, String>(0))?
            .map(|s| s?.parse())
            .collect::<OutputResult<Vec<RunId>>>()?;
        ids.sort_unstable();
        Ok(ids)
    }
}
