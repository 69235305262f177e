use runlog_core::{ErrorRecord, KindTag, LogRow, Severity};

use crate::container::{
    ContainerException, KeyedRecords, MergePolicy, block, numbered, optional_field,
};

/// Files held open by another process. Keyed by path.
///
/// Record fields: `[name, path]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesInUse {
    files: KeyedRecords,
}

impl FilesInUse {
    pub fn new(name: impl Into<String>, path: impl Into<String>, origin: impl Into<String>) -> Self {
        Self::from_record(ErrorRecord::with_fields(origin, vec![name.into(), path.into()]))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let key = record.field(1).to_string();
        Self {
            files: KeyedRecords::single(key, record),
        }
    }
}

impl ContainerException for FilesInUse {
    const TAG: KindTag = KindTag::FilesInUse;
    const POLICY: MergePolicy = MergePolicy::KeepFirst;

    fn element_count(&self) -> usize {
        self.files.len()
    }

    fn merge(&mut self, other: &Self) {
        self.files.merge(&other.files, Self::POLICY);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.files.iter().map(|(_, rec)| {
                (
                    format!("File In Use: {{ Name: {}, Path: {} }}", rec.field(0), rec.field(1)),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.files.is_empty() {
            return String::new();
        }
        format!("{} files are in-use and could not be opened.", self.files.len())
    }

    fn detailed_message(&self, severity: Severity) -> String {
        block(
            severity,
            "The following files are in-use and could not be opened:",
            self.files
                .iter()
                .map(|(_, rec)| format!("{}, Path: {}", rec.field(0), rec.field(1))),
        )
    }
}

/// Files whose layout differs from what the reader expects (missing rows, columns...).
/// Keyed by file name.
///
/// Record fields: `[name, path, issue]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFormatIssues {
    files: KeyedRecords,
}

impl FileFormatIssues {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        issue: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![name.into(), path.into(), issue.into()],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let key = record.field(0).to_string();
        Self {
            files: KeyedRecords::single(key, record),
        }
    }
}

impl ContainerException for FileFormatIssues {
    const TAG: KindTag = KindTag::FileFormatIssues;
    const POLICY: MergePolicy = MergePolicy::KeepFirst;

    fn element_count(&self) -> usize {
        self.files.len()
    }

    fn merge(&mut self, other: &Self) {
        self.files.merge(&other.files, Self::POLICY);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.files.iter().map(|(_, rec)| {
                (
                    format!(
                        "File Has Formatting Issues: {{ Issue: {}, Path: {} }}",
                        rec.field(2),
                        rec.field(1)
                    ),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.files.is_empty() {
            return String::new();
        }
        format!("{} files had formatting issues.", self.files.len())
    }

    fn detailed_message(&self, severity: Severity) -> String {
        block(
            severity,
            "The following files had formatting issues:",
            self.files.iter().map(|(name, rec)| {
                format!(
                    "{name}:\n\t  Path: {}\n\t  Issue: {}",
                    rec.field(1),
                    rec.field(2)
                )
            }),
        )
    }
}

/// Application configuration files that could not be opened. Keyed by config name.
///
/// Record fields: `[name, path, reason]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingConfigFiles {
    files: KeyedRecords,
}

impl MissingConfigFiles {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        origin: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![name.into(), path.into(), reason.into()],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let key = record.field(0).to_string();
        Self {
            files: KeyedRecords::single(key, record),
        }
    }
}

impl ContainerException for MissingConfigFiles {
    const TAG: KindTag = KindTag::MissingConfigFiles;
    const POLICY: MergePolicy = MergePolicy::KeepFirst;

    fn element_count(&self) -> usize {
        self.files.len()
    }

    fn merge(&mut self, other: &Self) {
        self.files.merge(&other.files, Self::POLICY);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.files.iter().map(|(_, rec)| {
                (
                    format!(
                        "Missing Config File: {{ {}{} }}",
                        rec.field(1),
                        optional_field(rec, 2, "Reason")
                    ),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.files.is_empty() {
            return String::new();
        }
        format!("{} configuration files were missing.", self.files.len())
    }

    fn detailed_message(&self, severity: Severity) -> String {
        block(
            severity,
            "The following application configuration files could not be opened:",
            self.files
                .iter()
                .map(|(name, rec)| format!("{name}, Path: {}", rec.field(1))),
        )
    }
}

/// Input data files that do not exist. Keyed by file name.
///
/// Record fields: `[name, path, reason]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingInputFiles {
    files: KeyedRecords,
}

impl MissingInputFiles {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        origin: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![name.into(), path.into(), reason.into()],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let key = record.field(0).to_string();
        Self {
            files: KeyedRecords::single(key, record),
        }
    }
}

impl ContainerException for MissingInputFiles {
    const TAG: KindTag = KindTag::MissingInputFiles;
    const POLICY: MergePolicy = MergePolicy::KeepFirst;

    fn element_count(&self) -> usize {
        self.files.len()
    }

    fn merge(&mut self, other: &Self) {
        self.files.merge(&other.files, Self::POLICY);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.files.iter().map(|(_, rec)| {
                (
                    format!(
                        "Missing Input File: {{ {}{} }}",
                        rec.field(1),
                        optional_field(rec, 2, "Reason")
                    ),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.files.is_empty() {
            return String::new();
        }
        format!("{} data files could not be loaded.", self.files.len())
    }

    fn detailed_message(&self, severity: Severity) -> String {
        block(
            severity,
            "The following data files could not be found:",
            self.files
                .iter()
                .map(|(name, rec)| format!("{name}, Path: {}", rec.field(1))),
        )
    }
}

/// Output files that could not be written. Keyed by file name; a later report replaces an
/// earlier one for the same file.
///
/// Record fields: `[name, path, reason]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedToGenerateFiles {
    files: KeyedRecords,
}

impl FailedToGenerateFiles {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        origin: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![name.into(), path.into(), reason.into()],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let key = record.field(0).to_string();
        Self {
            files: KeyedRecords::single(key, record),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ErrorRecord> {
        self.files.get(name)
    }
}

impl ContainerException for FailedToGenerateFiles {
    const TAG: KindTag = KindTag::FailedToGenerateFiles;
    const POLICY: MergePolicy = MergePolicy::Replace;

    fn element_count(&self) -> usize {
        self.files.len()
    }

    fn merge(&mut self, other: &Self) {
        self.files.merge(&other.files, Self::POLICY);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.files.iter().map(|(name, rec)| {
                (
                    format!(
                        "Failed to generate file: {{ {name}, Path: {}{} }}",
                        rec.field(1),
                        optional_field(rec, 2, "Reason")
                    ),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.files.is_empty() {
            return String::new();
        }
        format!("{} files could not be generated.", self.files.len())
    }

    fn detailed_message(&self, severity: Severity) -> String {
        block(
            severity,
            "The following files could not be generated:",
            self.files
                .iter()
                .map(|(name, rec)| format!("{name}{}", optional_field(rec, 2, "reason"))),
        )
    }
}
