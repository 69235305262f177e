//! The container contract and its type-erased form.
//!
//! Every concrete error kind is a container: a deduplicated set of leaf records under one
//! [`KindTag`]. Kinds implement [`ContainerException`] statically; the aggregator only ever
//! sees them through [`Container`], which pairs a [`ContainerKind`] with the severity it was
//! reported at and turns kind mismatches into [`MergeOutcome::Ignored`].
pub mod store;

use itertools::Itertools;
use runlog_core::{ErrorRecord, KindTag, LogRow, Severity};

use crate::catalogue::{
    FailedToCreateSheets, FailedToGenerateFiles, FailedToGenerateReports, FileFormatIssues,
    FilesInUse, GenericValueErrors, MissingCalibers, MissingConfigFiles, MissingCurves,
    MissingFolders, MissingInflationIndices, MissingInputFiles,
};

pub use store::{GroupedRecords, KeyedRecords};

/// What happens when an incoming record collides with an existing dedup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Single record per key; the incoming record is dropped.
    KeepFirst,
    /// Single record per key; the incoming record overwrites.
    Replace,
    /// Records concatenate per group key, skipping items the group already holds.
    ConcatenateDistinct,
    /// No dedup key at all; every record is kept.
    AppendAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged,
    /// The other container was a different kind (or severity); nothing changed.
    Ignored,
}

/// Capability set shared by every concrete error kind.
pub trait ContainerException: Sized {
    const TAG: KindTag;
    const POLICY: MergePolicy;

    /// Number of leaf elements held.
    fn element_count(&self) -> usize;

    /// Fold `other`'s elements into `self` according to [`Self::POLICY`].
    fn merge(&mut self, other: &Self);

    /// One row per leaf element, each prefixed with `severity`'s indicator.
    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow>;

    /// One line; empty when the container holds nothing.
    fn concise_message(&self) -> String;

    fn detailed_message(&self, severity: Severity) -> String;

    fn is_empty(&self) -> bool {
        self.element_count() == 0
    }
}

/// `"{indicator}{heading}\n{\n\t<line>\n...}"`, or empty when there are no lines.
pub(crate) fn block<I>(severity: Severity, heading: &str, lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let body = lines.into_iter().map(|l| format!("\t{l}\n")).join("");
    if body.is_empty() {
        return String::new();
    }
    format!("{}{heading}\n{{\n{body}}}", severity.indicator())
}

/// `", {label}: {value}"` when the record carries field `index`, else empty.
pub(crate) fn optional_field(record: &ErrorRecord, index: usize, label: &str) -> String {
    if record.has_field(index) {
        format!(", {label}: {}", record.field(index))
    } else {
        String::new()
    }
}

/// Number rows from zero in the order they were produced.
pub(crate) fn numbered<'a, I>(severity: Severity, rows: I) -> Vec<LogRow>
where
    I: IntoIterator<Item = (String, &'a ErrorRecord)>,
{
    rows.into_iter()
        .enumerate()
        .map(|(seq, (text, record))| {
            LogRow::for_record(format!("{}{text}", severity.indicator()), seq, record)
        })
        .collect()
}

macro_rules! container_kinds {
    ($($kind:ident),* $(,)?) => {
        /// Closed set of concrete kinds, one variant per [`KindTag`].
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum ContainerKind {
            $($kind($kind)),*
        }

        impl ContainerKind {
            pub fn tag(&self) -> KindTag {
                match self {
                    $(ContainerKind::$kind(_) => <$kind as ContainerException>::TAG),*
                }
            }

            pub fn policy(&self) -> MergePolicy {
                match self {
                    $(ContainerKind::$kind(_) => <$kind as ContainerException>::POLICY),*
                }
            }

            pub fn element_count(&self) -> usize {
                match self {
                    $(ContainerKind::$kind(c) => c.element_count()),*
                }
            }

            /// Merge when both sides are the same kind; a mismatch is a no-op.
            pub fn merge(&mut self, other: &ContainerKind) -> MergeOutcome {
                match (self, other) {
                    $((ContainerKind::$kind(mine), ContainerKind::$kind(theirs)) => {
                        mine.merge(theirs);
                        MergeOutcome::Merged
                    })*
                    _ => MergeOutcome::Ignored,
                }
            }

            pub fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
                match self {
                    $(ContainerKind::$kind(c) => c.to_log_rows(severity)),*
                }
            }

            pub fn concise_message(&self) -> String {
                match self {
                    $(ContainerKind::$kind(c) => c.concise_message()),*
                }
            }

            pub fn detailed_message(&self, severity: Severity) -> String {
                match self {
                    $(ContainerKind::$kind(c) => c.detailed_message(severity)),*
                }
            }
        }

        $(
            impl From<$kind> for ContainerKind {
                fn from(c: $kind) -> Self {
                    ContainerKind::$kind(c)
                }
            }

            impl std::fmt::Display for $kind {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.concise_message())
                }
            }

            impl std::error::Error for $kind {}
        )*
    };
}

container_kinds!(
    FilesInUse,
    FileFormatIssues,
    MissingFolders,
    MissingConfigFiles,
    MissingInputFiles,
    FailedToGenerateReports,
    FailedToCreateSheets,
    FailedToGenerateFiles,
    GenericValueErrors,
    MissingCalibers,
    MissingCurves,
    MissingInflationIndices,
);

/// A container as stored by the aggregator: a kind plus the severity it was reported at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    severity: Severity,
    kind: ContainerKind,
}

impl Container {
    pub(crate) fn new(severity: Severity, kind: impl Into<ContainerKind>) -> Self {
        Self {
            severity,
            kind: kind.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn tag(&self) -> KindTag {
        self.kind.tag()
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn element_count(&self) -> usize {
        self.kind.element_count()
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// Fold `other` into `self`. Containers of another kind or severity are ignored.
    pub fn merge(&mut self, other: &Container) -> MergeOutcome {
        if self.severity != other.severity {
            return MergeOutcome::Ignored;
        }
        self.kind.merge(&other.kind)
    }

    pub fn to_log_rows(&self) -> Vec<LogRow> {
        self.kind.to_log_rows(self.severity)
    }

    pub fn concise_message(&self) -> String {
        self.kind.concise_message()
    }

    pub fn detailed_message(&self) -> String {
        self.kind.detailed_message(self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_kinds_are_ignored() {
        let mut files = Container::new(
            Severity::SemiFatal,
            FilesInUse::new("x.csv", r"C:\a\x.csv", "Loader::open()"),
        );
        let folders = Container::new(
            Severity::SemiFatal,
            MissingFolders::new(r"C:\a\", "Loader::scan()", ""),
        );

        assert_eq!(files.merge(&folders), MergeOutcome::Ignored);
        assert_eq!(files.element_count(), 1);
        assert_eq!(files.tag(), KindTag::FilesInUse);
    }

    #[test]
    fn mismatched_severities_are_ignored() {
        let mut semi = Container::new(
            Severity::SemiFatal,
            FilesInUse::new("x.csv", r"C:\a\x.csv", "Loader::open()"),
        );
        let non = Container::new(
            Severity::NonFatal,
            FilesInUse::new("y.csv", r"C:\a\y.csv", "Loader::open()"),
        );
        assert_eq!(semi.merge(&non), MergeOutcome::Ignored);
        assert_eq!(semi.element_count(), 1);
    }

    #[test]
    fn same_kind_merges_through_the_erased_form() {
        let mut a = Container::new(
            Severity::NonFatal,
            GenericValueErrors::new("Cannot convert date.", "Parser::date()"),
        );
        let b = a.clone();
        assert_eq!(a.merge(&b), MergeOutcome::Merged);
        assert_eq!(a.element_count(), 2);
    }

    #[test]
    fn block_is_empty_without_lines() {
        assert_eq!(block(Severity::Fatal, "heading", Vec::new()), "");
        assert_eq!(
            block(Severity::Fatal, "heading:", vec!["one".to_string()]),
            "(Fatal) heading:\n{\n\tone\n}"
        );
    }

    #[test]
    fn every_tag_has_a_kind() {
        let tags: Vec<KindTag> = crate::catalogue::samples()
            .into_iter()
            .map(|k| k.tag())
            .collect();
        assert_eq!(tags, KindTag::ALL.to_vec());
    }
}
