use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a concrete error kind.
///
/// Two containers may only be merged when their tags are equal. The ordering is the
/// declaration order and is what makes bucket iteration deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KindTag {
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
}

impl KindTag {
    pub const ALL: [KindTag; 12] = [
        KindTag::FilesInUse,
        KindTag::FileFormatIssues,
        KindTag::MissingFolders,
        KindTag::MissingConfigFiles,
        KindTag::MissingInputFiles,
        KindTag::FailedToGenerateReports,
        KindTag::FailedToCreateSheets,
        KindTag::FailedToGenerateFiles,
        KindTag::GenericValueErrors,
        KindTag::MissingCalibers,
        KindTag::MissingCurves,
        KindTag::MissingInflationIndices,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KindTag::FilesInUse => "FilesInUse",
            KindTag::FileFormatIssues => "FileFormatIssues",
            KindTag::MissingFolders => "MissingFolders",
            KindTag::MissingConfigFiles => "MissingConfigFiles",
            KindTag::MissingInputFiles => "MissingInputFiles",
            KindTag::FailedToGenerateReports => "FailedToGenerateReports",
            KindTag::FailedToCreateSheets => "FailedToCreateSheets",
            KindTag::FailedToGenerateFiles => "FailedToGenerateFiles",
            KindTag::GenericValueErrors => "GenericValueErrors",
            KindTag::MissingCalibers => "MissingCalibers",
            KindTag::MissingCurves => "MissingCurves",
            KindTag::MissingInflationIndices => "MissingInflationIndices",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
