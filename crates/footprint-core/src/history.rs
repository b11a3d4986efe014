// crates/footprint-core/src/history.rs

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calc::round2;
use crate::error::Result;
use crate::types::{Breakdown, CalculationResult, Measurements};

/// Maximum number of saved calculations; the oldest is evicted on overflow.
pub const HISTORY_CAPACITY: usize = 12;

const HISTORY_FORMAT_VERSION: u32 = 1;

/// One saved calculation. Totals are stored on the weekly basis, rounded to
/// two decimals; the display timeframe is deliberately not part of the
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub total_weekly: f64,
    pub parts_weekly: Breakdown,
    pub inputs: Measurements,
}

impl HistoryEntry {
    pub fn new(
        inputs: Measurements,
        result: &CalculationResult,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            recorded_at,
            total_weekly: round2(result.total),
            parts_weekly: result.parts,
            inputs,
        }
    }
}

/// On-disk envelope. The version gate makes malformed or legacy content fail
/// closed (treated as empty) instead of erroring.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    entries: Vec<HistoryEntry>,
}

/// Storage for past calculations, newest first, capped at
/// [`HISTORY_CAPACITY`].
pub trait HistoryStore {
    fn load(&self) -> Result<Vec<HistoryEntry>>;

    /// Front-inserts `entry`, truncates to capacity, persists the whole list
    /// back, and returns it. The overwrite is all-or-nothing; the history is
    /// a non-critical cache, so no partial-write recovery is attempted.
    fn record(&self, entry: HistoryEntry) -> Result<Vec<HistoryEntry>>;

    /// Deletes the history. Idempotent; clearing an empty history is a no-op.
    fn clear(&self) -> Result<()>;
}

/// History persisted as a single named JSON file slot.
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<HistoryFile>(&raw) {
            Ok(file) if file.version == HISTORY_FORMAT_VERSION => Ok(file.entries),
            Ok(file) => {
                warn!(
                    version = file.version,
                    "unsupported history version, treating history as empty"
                );
                Ok(Vec::new())
            }
            Err(err) => {
                warn!(%err, "malformed history file, treating history as empty");
                Ok(Vec::new())
            }
        }
    }

    fn record(&self, entry: HistoryEntry) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.load()?;
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAPACITY);

        let file = HistoryFile {
            version: HISTORY_FORMAT_VERSION,
            entries,
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(file.entries)
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
