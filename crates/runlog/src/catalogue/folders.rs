use runlog_core::{ErrorRecord, KindTag, LogRow, Severity};

use crate::container::{
    ContainerException, KeyedRecords, MergePolicy, block, numbered, optional_field,
};

/// Folders the application needs but could not find. Keyed by folder path; the most recent
/// report for a folder wins.
///
/// Record fields: `[path, reason]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFolders {
    folders: KeyedRecords,
}

impl MissingFolders {
    pub fn new(
        path: impl Into<String>,
        origin: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![path.into(), reason.into()],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let key = record.field(0).to_string();
        Self {
            folders: KeyedRecords::single(key, record),
        }
    }

    pub fn get(&self, path: &str) -> Option<&ErrorRecord> {
        self.folders.get(path)
    }
}

impl ContainerException for MissingFolders {
    const TAG: KindTag = KindTag::MissingFolders;
    const POLICY: MergePolicy = MergePolicy::Replace;

    fn element_count(&self) -> usize {
        self.folders.len()
    }

    fn merge(&mut self, other: &Self) {
        self.folders.merge(&other.folders, Self::POLICY);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.folders.iter().map(|(path, rec)| {
                (
                    format!(
                        "Missing Folder: {{ {path}{} }}",
                        optional_field(rec, 1, "Reason")
                    ),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.folders.is_empty() {
            return String::new();
        }
        format!("{} folders are missing.", self.folders.len())
    }

    fn detailed_message(&self, severity: Severity) -> String {
        block(
            severity,
            "The following folders are missing:",
            self.folders
                .iter()
                .map(|(path, rec)| format!("{path}{}", optional_field(rec, 1, "reason"))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn later_report_replaces_reason() {
        let t = |s| Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, s).unwrap();
        let mut c = MissingFolders::from_record(ErrorRecord::at(
            "Setup::check()",
            t(0),
            [r"C:\data\", ""],
        ));
        c.merge(&MissingFolders::from_record(ErrorRecord::at(
            "Setup::verify()",
            t(5),
            [r"C:\data\", "Network share offline."],
        )));

        assert_eq!(c.element_count(), 1);
        let rec = c.get(r"C:\data\").expect("folder present");
        assert_eq!(rec.origin(), "Setup::verify()");
        assert_eq!(rec.timestamp(), t(5));
        assert_eq!(
            c.to_log_rows(Severity::Fatal)[0].text,
            r"(Fatal) Missing Folder: { C:\data\, Reason: Network share offline. }"
        );
    }

    #[test]
    fn detailed_lists_each_folder_on_its_own_line() {
        let mut c = MissingFolders::new(r"C:\a\", "Setup::check()", "");
        c.merge(&MissingFolders::new(r"C:\b\", "Setup::check()", "Deleted."));
        assert_eq!(
            c.detailed_message(Severity::SemiFatal),
            "(SemiFatal) The following folders are missing:\n{\n\tC:\\a\\\n\tC:\\b\\, reason: Deleted.\n}"
        );
        assert_eq!(c.concise_message(), "2 folders are missing.");
    }
}
