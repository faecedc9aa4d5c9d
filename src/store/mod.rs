//! Best-time record store.
//!
//! The store is a small JSON file with two slots, `record_now` and
//! `record_before`. Every read or write first runs an integrity check that
//! resets any slot whose tag does not match its time and persists the
//! corrected file, so a corrupted value never reaches a caller.
//!
//! There is no protection against another process writing the same file
//! concurrently.

pub mod integrity;
pub mod log;
pub mod models;

use crate::errors::{AppError, AppResult};
use integrity::{Sha256Tag, IntegrityTag};
use models::{RECORD_BEFORE, RECORD_NOW, RawRecordFile, RawSlot, RecordFile, Slot};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// What the timer session needs from persistent storage.
pub trait BestTimeStore {
    /// Current best time, if any.
    fn current_best(&mut self) -> AppResult<Option<f64>>;

    /// Replace the current best with `time`.
    fn record_best(&mut self, time: f64) -> AppResult<()>;
}

pub struct RecordStore<T: IntegrityTag = Sha256Tag> {
    path: PathBuf,
    log_file: PathBuf,
    tag: T,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_tag(path, Sha256Tag)
    }
}

impl<T: IntegrityTag> RecordStore<T> {
    pub fn with_tag(path: impl Into<PathBuf>, tag: T) -> Self {
        let path = path.into();
        let log_file = log::log_file_for(&path);
        Self {
            path,
            log_file,
            tag,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Make sure the record file exists and has both slots with both keys.
    /// Anything else (missing, unreadable, unparsable) is overwritten with
    /// two empty slots.
    pub fn initialize(&self) -> AppResult<()> {
        if self.load_raw().is_none() {
            self.reset_file()?;
        }
        Ok(())
    }

    pub fn get_current_best(&self) -> AppResult<Option<f64>> {
        Ok(self.check_times()?.record_now.time)
    }

    pub fn get_previous_best(&self) -> AppResult<Option<f64>> {
        Ok(self.check_times()?.record_before.time)
    }

    /// Checked view of the whole file.
    pub fn snapshot(&self) -> AppResult<RecordFile> {
        self.check_times()
    }

    /// Store `new_time` as the current best and shift the old current best
    /// into `record_before`. The file is rewritten as a whole.
    pub fn set_new_best(&self, new_time: f64) -> AppResult<()> {
        if !new_time.is_finite() || new_time <= 0.0 {
            return Err(AppError::InvalidTime(format!(
                "{new_time} (a record must be a positive number of seconds)"
            )));
        }

        let last_record = self.check_times()?.record_now.time;

        let file = RecordFile {
            record_now: Slot::new(Some(new_time), &self.tag),
            record_before: Slot::new(last_record, &self.tag),
        };
        self.write(&file)?;

        let message = match last_record {
            Some(old) => format!("New best {new_time:.3}s (was {old:.3}s)"),
            None => format!("First best {new_time:.3}s"),
        };
        self.log("new_best", &message);

        Ok(())
    }

    /// Load the file, reset slots that fail verification and write the
    /// result back before returning it.
    fn check_times(&self) -> AppResult<RecordFile> {
        let Some(raw) = self.load_raw() else {
            return self.reset_file();
        };

        let checked = RecordFile {
            record_now: self.verify_slot(RECORD_NOW, &raw.record_now),
            record_before: self.verify_slot(RECORD_BEFORE, &raw.record_before),
        };
        self.write(&checked)?;

        Ok(checked)
    }

    fn verify_slot(&self, name: &str, raw: &RawSlot) -> Slot {
        raw.verify(&self.tag).unwrap_or_else(|| {
            self.log_target("repair", name, "Integrity tag mismatch, slot reset");
            Slot::absent(&self.tag)
        })
    }

    fn load_raw(&self) -> Option<RawRecordFile> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn reset_file(&self) -> AppResult<RecordFile> {
        let blank = RecordFile::blank(&self.tag);
        self.write(&blank)?;
        self.log("init", "Record file initialized with empty slots");
        Ok(blank)
    }

    fn write(&self, file: &RecordFile) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        file.serialize(&mut ser)?;
        buf.push(b'\n');

        fs::write(&self.path, buf)?;
        Ok(())
    }

    fn log(&self, operation: &str, message: &str) {
        let target = self.path.to_string_lossy();
        self.log_target(operation, &target, message);
    }

    // The event log is informational: a failed write must not fail the
    // record operation.
    fn log_target(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = log::ttlog(&self.log_file, operation, target, message) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }
}

impl<T: IntegrityTag> BestTimeStore for RecordStore<T> {
    fn current_best(&mut self) -> AppResult<Option<f64>> {
        self.get_current_best()
    }

    fn record_best(&mut self, time: f64) -> AppResult<()> {
        self.set_new_best(time)
    }
}
