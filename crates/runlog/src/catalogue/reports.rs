use itertools::Itertools;
use runlog_core::{ErrorRecord, KindTag, LogRow, Severity};

use crate::container::{
    ContainerException, GroupedRecords, KeyedRecords, MergePolicy, block, numbered,
    optional_field,
};

/// Reports that failed to generate. Keyed by report name.
///
/// Record fields: `[report, reason]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedToGenerateReports {
    reports: KeyedRecords,
}

impl FailedToGenerateReports {
    pub fn new(
        report: impl Into<String>,
        origin: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![report.into(), reason.into()],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let key = record.field(0).to_string();
        Self {
            reports: KeyedRecords::single(key, record),
        }
    }
}

impl ContainerException for FailedToGenerateReports {
    const TAG: KindTag = KindTag::FailedToGenerateReports;
    const POLICY: MergePolicy = MergePolicy::KeepFirst;

    fn element_count(&self) -> usize {
        self.reports.len()
    }

    fn merge(&mut self, other: &Self) {
        self.reports.merge(&other.reports, Self::POLICY);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.reports.iter().map(|(report, rec)| {
                (
                    format!(
                        "Failed to Generate Report: {{ Report: {report}{} }}",
                        optional_field(rec, 1, "Reason")
                    ),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.reports.is_empty() {
            return String::new();
        }
        format!("{} reports failed to generate.", self.reports.len())
    }

    fn detailed_message(&self, severity: Severity) -> String {
        block(
            severity,
            "The following reports failed to generate:",
            self.reports.iter().map(|(report, rec)| {
                format!("Report: {report}{}", optional_field(rec, 1, "Reason"))
            }),
        )
    }
}

/// Sheets that could not be created, grouped by the document they belong to.
///
/// The dedup key is the `(document, sheet)` pair. Record fields: `[document, sheet, reason]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedToCreateSheets {
    sheets: GroupedRecords,
}

impl FailedToCreateSheets {
    pub fn new(
        sheet: impl Into<String>,
        origin: impl Into<String>,
        document: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![document.into(), sheet.into(), reason.into()],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let document = record.field(0).to_string();
        let sheet = record.field(1).to_string();
        Self {
            sheets: GroupedRecords::single(document, sheet, record),
        }
    }

    pub fn document_count(&self) -> usize {
        self.sheets.group_count()
    }
}

impl ContainerException for FailedToCreateSheets {
    const TAG: KindTag = KindTag::FailedToCreateSheets;
    const POLICY: MergePolicy = MergePolicy::ConcatenateDistinct;

    fn element_count(&self) -> usize {
        self.sheets.len()
    }

    fn merge(&mut self, other: &Self) {
        self.sheets.merge(&other.sheets);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.sheets.iter().map(|(document, sheet, rec)| {
                (
                    format!(
                        "Failed to Generate Sheet: {{ Document: {document}, Sheet: {sheet}{} }}",
                        optional_field(rec, 2, "Reason")
                    ),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.sheets.is_empty() {
            return String::new();
        }
        format!(
            "{} sheets failed to be created across {} documents.",
            self.sheets.len(),
            self.sheets.group_count()
        )
    }

    fn detailed_message(&self, severity: Severity) -> String {
        self.sheets
            .groups()
            .map(|(document, entries)| {
                format!(
                    "{}Could not generate the following sheets for {document}: {{ {} }}",
                    severity.indicator(),
                    entries.iter().map(|(sheet, _)| sheet).join(", ")
                )
            })
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_report_name_is_counted_once() {
        let mut c = FailedToGenerateReports::new("Daily", "Reports::run()", "");
        c.merge(&FailedToGenerateReports::new("Daily", "Reports::run()", "Timeout."));
        c.merge(&FailedToGenerateReports::new("Weekly", "Reports::run()", ""));
        assert_eq!(c.element_count(), 2);
        assert_eq!(c.concise_message(), "2 reports failed to generate.");
        let rows = c.to_log_rows(Severity::SemiFatal);
        assert_eq!(
            rows[0].text,
            "(SemiFatal) Failed to Generate Report: { Report: Daily }"
        );
    }

    #[test]
    fn sheets_dedup_on_document_and_sheet() {
        let mut c = FailedToCreateSheets::new("TestSheet", "Doc::build()", "TestDoc", "TestReason");
        c.merge(&FailedToCreateSheets::new("TestSheet", "Doc::build()", "TestDoc", "TestReason"));
        c.merge(&FailedToCreateSheets::new("TestSheet2", "Doc::build()", "TestDoc", "TestReason2"));
        c.merge(&FailedToCreateSheets::new("TestSheet", "Doc::build()", "OtherDoc", ""));

        assert_eq!(c.element_count(), 3);
        assert_eq!(c.document_count(), 2);
        assert_eq!(
            c.concise_message(),
            "3 sheets failed to be created across 2 documents."
        );
    }

    #[test]
    fn sheet_detail_groups_by_document() {
        let mut c = FailedToCreateSheets::new("A", "Doc::build()", "Doc1", "");
        c.merge(&FailedToCreateSheets::new("B", "Doc::build()", "Doc1", ""));
        assert_eq!(
            c.detailed_message(Severity::SemiFatal),
            "(SemiFatal) Could not generate the following sheets for Doc1: { A, B }"
        );
        let rows = c.to_log_rows(Severity::SemiFatal);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1].text,
            "(SemiFatal) Failed to Generate Sheet: { Document: Doc1, Sheet: B }"
        );
    }
}
