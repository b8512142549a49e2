//! CSV-backed session log.
//!
//! The whole log lives in memory; every save rewrites the file from scratch
//! under a fixed header. The file is neither locked nor written atomically.

use crate::errors::AppResult;
use crate::models::SessionEntry;
use crate::models::session_entry::HEADERS;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default log file name, resolved against the working directory.
pub const DEFAULT_LOG_FILE: &str = "clock_in_out_log.csv";

pub const NO_LOGS: &str = "No logs found.";

pub struct SessionLogStore {
    path: PathBuf,
    entries: Vec<SessionEntry>,
}

impl SessionLogStore {
    /// Bind a store to `path` and load whatever history it holds.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = Self::load(&path)?;
        Ok(Self { path, entries })
    }

    /// Parse the log at `path`.
    ///
    /// - file missing → empty history, not an error
    /// - columns are matched by the file's own header row
    /// - short rows leave the missing columns blank, extra cells are ignored
    /// - unreadable content (e.g. invalid UTF-8) aborts the load
    pub fn load(path: &Path) -> AppResult<Vec<SessionEntry>> {
        if !path.exists() {
            debug!(path = %path.display(), "no session log yet");
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = rdr.headers()?.clone();

        let mut entries = Vec::new();
        for record in rdr.records() {
            let record = record?;
            entries.push(SessionEntry::from_record(&headers, &record));
        }

        info!(path = %path.display(), entries = entries.len(), "session log loaded");
        Ok(entries)
    }

    /// Add an entry to the in-memory log. Values are not validated.
    pub fn append_entry(&mut self, entry: SessionEntry) {
        self.entries.push(entry);
    }

    /// Rewrite the backing file: header row, then one row per entry in
    /// insertion order.
    pub fn save(&self) -> AppResult<()> {
        let mut wtr = csv::Writer::from_path(&self.path)?;

        wtr.write_record(HEADERS)?;
        for entry in &self.entries {
            wtr.write_record(entry.to_row())?;
        }

        wtr.flush()?;
        debug!(path = %self.path.display(), entries = self.entries.len(), "session log saved");
        Ok(())
    }

    /// One line per entry, oldest first.
    pub fn render_log(&self) -> String {
        if self.entries.is_empty() {
            return NO_LOGS.to_string();
        }

        self.entries
            .iter()
            .map(SessionEntry::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn entries(&self) -> &[SessionEntry] {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
