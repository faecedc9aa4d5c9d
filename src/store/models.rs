//! On-disk schema of the record file.
//!
//! ```json
//! {
//!     "record_now": { "time": 12.345, "code": 1234567890 },
//!     "record_before": { "time": null, "code": 987654321 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::integrity::IntegrityTag;

pub const RECORD_NOW: &str = "record_now";
pub const RECORD_BEFORE: &str = "record_before";

/// One best-time slot, always written with a tag matching its time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slot {
    pub time: Option<f64>,
    pub code: u64,
}

impl Slot {
    pub fn new<T: IntegrityTag + ?Sized>(time: Option<f64>, tag: &T) -> Self {
        Self {
            time,
            code: tag.tag(time),
        }
    }

    pub fn absent<T: IntegrityTag + ?Sized>(tag: &T) -> Self {
        Self::new(None, tag)
    }
}

/// The whole record file: current best and the one it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordFile {
    pub record_now: Slot,
    pub record_before: Slot,
}

impl RecordFile {
    pub fn blank<T: IntegrityTag + ?Sized>(tag: &T) -> Self {
        Self {
            record_now: Slot::absent(tag),
            record_before: Slot::absent(tag),
        }
    }
}

/// Loosely typed view of a file read from disk.
///
/// Both slots and both keys inside each slot must be present for the file
/// to parse; the values themselves are checked later, slot by slot.
#[derive(Debug, Deserialize)]
pub struct RawRecordFile {
    pub record_now: RawSlot,
    pub record_before: RawSlot,
}

#[derive(Debug, Deserialize)]
pub struct RawSlot {
    pub time: Value,
    pub code: Value,
}

impl RawSlot {
    /// Returns the typed slot when `time` is a number or null, `code` is an
    /// unsigned integer, and `code` equals the tag of `time`.
    pub fn verify<T: IntegrityTag + ?Sized>(&self, tag: &T) -> Option<Slot> {
        let time = match &self.time {
            Value::Null => None,
            Value::Number(n) => Some(n.as_f64()?),
            _ => return None,
        };
        let code = self.code.as_u64()?;

        (code == tag.tag(time)).then_some(Slot { time, code })
    }
}
