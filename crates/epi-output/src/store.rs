//! Persistence of completed runs.
//!
//! A stored run holds the parameters it was started with, its results, and
//! the time it was saved.  Each save is assigned a fresh [`RunId`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use epi_core::OutbreakConfig;

use crate::{OutbreakReport, OutputError, OutputResult};

// ── RunId ─────────────────────────────────────────────────────────────────────

/// Identifier of a stored run (random UUID v4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RunId {
    type Err = OutputError;

    fn from_str(s: &str) -> OutputResult<Self> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ── StoredRun ─────────────────────────────────────────────────────────────────

/// Parameters, results, and save time of one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredRun {
    pub parameters: OutbreakConfig,
    pub results:    OutbreakReport,
    /// Seconds since the Unix epoch.
    pub timestamp:  u64,
}

impl StoredRun {
    /// Stamp `parameters` and `results` with the current time.
    pub fn new(parameters: OutbreakConfig, results: OutbreakReport) -> Self {
        Self { parameters, results, timestamp: unix_now() }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// ── RunStore ──────────────────────────────────────────────────────────────────

/// A place completed runs can be saved to and read back from.
pub trait RunStore {
    /// Persist `run` under a newly generated id and return that id.
    fn save(&mut self, run: &StoredRun) -> OutputResult<RunId>;

    /// Fails with [`OutputError::NotFound`] for an unknown id.
    fn load(&self, id: RunId) -> OutputResult<StoredRun>;

    /// Ids of every stored run.
    fn list(&self) -> OutputResult<Vec<RunId>>;
}

/// Stores each run as `<run-id>.json` inside one directory.
#[derive(Clone, Debug)]
pub struct JsonRunStore {
    dir: PathBuf,
}

impl JsonRunStore {
    /// Open the store at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> OutputResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, id: RunId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl RunStore for JsonRunStore {
    fn save(&mut self, run: &StoredRun) -> OutputResult<RunId> {
        let id = RunId::new_v4();
        let path = self.path_of(id);
        fs::write(&path, serde_json::to_vec_pretty(run)?)?;
        debug!("stored run {id} at {}", path.display());
        Ok(id)
    }

    fn load(&self, id: RunId) -> OutputResult<StoredRun> {
        let bytes = match fs::read(self.path_of(id)) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(OutputError::NotFound(id));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Sorted by id.  Files that are not `<uuid>.json` are ignored.
    fn list(&self) -> OutputResult<Vec<RunId>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(id) = path.file_stem().and_then(|s| s.to_str()).and_then(|s| s.parse().ok()) {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }
}
