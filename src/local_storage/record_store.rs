use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{AppError, Result};
use crate::local_storage::workbook_codec::{decode_records, encode_records};
use crate::models::IssueRecord;

/// Append-only issue log kept in a single workbook file.
///
/// Every write rewrites the whole file. The mutex serialises writers inside
/// this process only; a second process writing the same file can still lose
/// appends.
pub struct RecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Loads every record, creating an empty workbook with the fixed schema
    /// if none exists yet.
    pub fn load(&self) -> Result<Vec<IssueRecord>> {
        let _guard = self.guard();

        if self.exists()? {
            self.read_all()
        } else {
            tracing::info!(path = %self.path.display(), "Creating empty issue log");
            self.write_all(&[])?;
            Ok(Vec::new())
        }
    }

    /// Re-reads the file, adds `record` after the existing rows and rewrites it.
    pub fn append(&self, record: &IssueRecord) -> Result<()> {
        let _guard = self.guard();

        let mut records = if self.exists()? {
            self.read_all()?
        } else {
            Vec::new()
        };
        records.push(record.clone());
        self.write_all(&records)?;

        tracing::info!(
            path = %self.path.display(),
            rows = records.len(),
            ship = %record.ship_name,
            "Appended issue record"
        );
        Ok(())
    }

    /// Replaces the file contents with exactly `records`.
    pub fn save_all(&self, records: &[IssueRecord]) -> Result<()> {
        let _guard = self.guard();

        self.write_all(records)?;
        tracing::info!(path = %self.path.display(), rows = records.len(), "Saved issue log");
        Ok(())
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn exists(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.unavailable(e)),
        }
    }

    fn read_all(&self) -> Result<Vec<IssueRecord>> {
        let file = File::open(&self.path).map_err(|e| self.unavailable(e))?;
        decode_records(BufReader::new(file))
    }

    fn write_all(&self, records: &[IssueRecord]) -> Result<()> {
        let bytes = encode_records(records)?;
        fs::write(&self.path, bytes).map_err(|e| self.unavailable(e))
    }

    fn unavailable(&self, err: io::Error) -> AppError {
        AppError::StorageUnavailable(format!("{}: {}", self.path.display(), err))
    }
}
