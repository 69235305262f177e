use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::Instant;

/// One reported occurrence: where it came from, when, and what was said about it.
///
/// Field positions are kind specific (e.g. `[file name, path]` for files in use). Records are
/// immutable; containers clone them when merging so no record is ever shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    origin: String,
    timestamp: Instant,
    fields: Vec<String>,
}

impl ErrorRecord {
    /// Record stamped with the current instant.
    pub fn new<I, S>(origin: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::at(origin, Utc::now(), fields)
    }

    /// Record stamped with the current instant, from already-owned fields.
    pub fn with_fields(origin: impl Into<String>, fields: Vec<String>) -> Self {
        Self::at(origin, Utc::now(), fields)
    }

    pub fn at<I, S>(origin: impl Into<String>, timestamp: Instant, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origin: origin.into(),
            timestamp,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `index`, or `""` when the record carries fewer fields.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or_default()
    }

    /// Whether the field at `index` holds anything other than whitespace.
    pub fn has_field(&self, index: usize) -> bool {
        !self.field(index).trim().is_empty()
    }

    /// `MM/dd/yyyy HH:mm:ss`, the format used in operator-facing text.
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%m/%d/%Y %H:%M:%S").to_string()
    }
}
