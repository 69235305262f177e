//! Missing domain reference data: caliber ids, merlin curves, inflation indices.
use chrono::NaiveDate;
use itertools::Itertools;
use runlog_core::{ErrorRecord, KindTag, LogRow, Severity};

use crate::container::{
    ContainerException, GroupedRecords, KeyedRecords, MergePolicy, block, numbered,
    optional_field,
};

const VALUE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Caliber ids that could not be found, grouped by the file that referenced them.
///
/// The dedup key is the `(file, caliber id)` pair. Record fields: `[file, caliber id]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCalibers {
    calibers: GroupedRecords,
}

impl MissingCalibers {
    pub fn new(
        caliber: impl Into<String>,
        origin: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![file.into(), caliber.into()],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let file = record.field(0).to_string();
        let caliber = record.field(1).to_string();
        Self {
            calibers: GroupedRecords::single(file, caliber, record),
        }
    }

    pub fn file_count(&self) -> usize {
        self.calibers.group_count()
    }
}

impl ContainerException for MissingCalibers {
    const TAG: KindTag = KindTag::MissingCalibers;
    const POLICY: MergePolicy = MergePolicy::ConcatenateDistinct;

    fn element_count(&self) -> usize {
        self.calibers.len()
    }

    fn merge(&mut self, other: &Self) {
        self.calibers.merge(&other.calibers);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.calibers.iter().map(|(file, caliber, rec)| {
                (
                    format!("Missing Caliber ID: {{ CaliberID: {caliber}, File: {file} }}"),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.calibers.is_empty() {
            return String::new();
        }
        format!(
            "{} Caliber IDs were missing across {} files.",
            self.calibers.len(),
            self.calibers.group_count()
        )
    }

    fn detailed_message(&self, severity: Severity) -> String {
        self.calibers
            .groups()
            .map(|(file, entries)| {
                block(
                    severity,
                    &format!("The following Caliber IDs could not be found in {file}:"),
                    [entries.iter().map(|(caliber, _)| caliber).join(", ")],
                )
            })
            .join("\n")
    }
}

/// Merlin curves missing from their production folder. Keyed by curve name.
///
/// Record fields: `[curve, value date, production folder]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCurves {
    curves: KeyedRecords,
}

impl MissingCurves {
    pub fn new(
        curve: impl Into<String>,
        origin: impl Into<String>,
        production_folder: impl Into<String>,
        value_date: NaiveDate,
    ) -> Self {
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![
                curve.into(),
                value_date.format(VALUE_DATE_FORMAT).to_string(),
                production_folder.into(),
            ],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let key = record.field(0).to_string();
        Self {
            curves: KeyedRecords::single(key, record),
        }
    }
}

impl ContainerException for MissingCurves {
    const TAG: KindTag = KindTag::MissingCurves;
    const POLICY: MergePolicy = MergePolicy::KeepFirst;

    fn element_count(&self) -> usize {
        self.curves.len()
    }

    fn merge(&mut self, other: &Self) {
        self.curves.merge(&other.curves, Self::POLICY);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.curves.iter().map(|(curve, rec)| {
                (
                    format!(
                        "Missing Merlin Curve: {{ Curve: {curve}, ValueDate: {}, Path: {} }}",
                        rec.field(1),
                        rec.field(2)
                    ),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.curves.is_empty() {
            return String::new();
        }
        format!("{} merlin curves were missing.", self.curves.len())
    }

    fn detailed_message(&self, severity: Severity) -> String {
        block(
            severity,
            "The following Merlin Curves could not be found in their production folders:",
            self.curves.iter().map(|(curve, rec)| {
                format!("{curve} (ValueDate: {}, Path: {})", rec.field(1), rec.field(2))
            }),
        )
    }
}

/// Inflation indices missing from a file, grouped by file.
///
/// The dedup key is the `(file, index)` pair. Record fields: `[file, index, value date]`,
/// where the value date may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingInflationIndices {
    indices: GroupedRecords,
}

impl MissingInflationIndices {
    pub fn new(
        index: impl Into<String>,
        origin: impl Into<String>,
        file: impl Into<String>,
        value_date: Option<NaiveDate>,
    ) -> Self {
        let value_date = value_date
            .map(|d| d.format(VALUE_DATE_FORMAT).to_string())
            .unwrap_or_default();
        Self::from_record(ErrorRecord::with_fields(
            origin,
            vec![file.into(), index.into(), value_date],
        ))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        let file = record.field(0).to_string();
        let index = record.field(1).to_string();
        Self {
            indices: GroupedRecords::single(file, index, record),
        }
    }

    pub fn file_count(&self) -> usize {
        self.indices.group_count()
    }
}

impl ContainerException for MissingInflationIndices {
    const TAG: KindTag = KindTag::MissingInflationIndices;
    const POLICY: MergePolicy = MergePolicy::ConcatenateDistinct;

    fn element_count(&self) -> usize {
        self.indices.len()
    }

    fn merge(&mut self, other: &Self) {
        self.indices.merge(&other.indices);
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.indices.iter().map(|(file, index, rec)| {
                (
                    format!(
                        "Missing Inflation Index: {{ IndexName: {index}, File: {file}{} }}",
                        optional_field(rec, 2, "ValueDate")
                    ),
                    rec,
                )
            }),
        )
    }

    fn concise_message(&self) -> String {
        if self.indices.is_empty() {
            return String::new();
        }
        format!(
            "{} Inflation Indices were missing across {} files.",
            self.indices.len(),
            self.indices.group_count()
        )
    }

    fn detailed_message(&self, severity: Severity) -> String {
        self.indices
            .groups()
            .map(|(file, entries)| {
                block(
                    severity,
                    &format!("The following Inflation Indices could not be found in {file}:"),
                    [entries.iter().map(|(index, _)| index).join(", ")],
                )
            })
            .join("\n")
    }
}
