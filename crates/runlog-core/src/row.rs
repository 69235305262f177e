use serde::{Deserialize, Serialize};

use crate::{ErrorRecord, Instant};

/// One line of the persisted log.
///
/// `sequence` is only meaningful relative to the sequence that produced the row: containers
/// number their own rows from zero, the chronological exporter renumbers the merged result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRow {
    pub text: String,
    pub sequence: usize,
    pub timestamp: Instant,
    pub origin: String,
}

impl LogRow {
    pub fn new(
        text: impl Into<String>,
        sequence: usize,
        timestamp: Instant,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            sequence,
            timestamp,
            origin: origin.into(),
        }
    }

    /// Row describing `record`, carrying its timestamp and origin.
    pub fn for_record(text: impl Into<String>, sequence: usize, record: &ErrorRecord) -> Self {
        Self::new(text, sequence, record.timestamp(), record.origin())
    }
}
