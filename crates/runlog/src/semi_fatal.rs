use runlog_core::KindTag;

use crate::catalogue::{
    FailedToCreateSheets, FailedToGenerateFiles, FailedToGenerateReports, FileFormatIssues,
    FilesInUse, MissingFolders, MissingInputFiles,
};
use crate::container::ContainerKind;

/// Kinds that abort the current multi-step operation while the process carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemiFatalKind {
    #[error(transparent)]
    FilesInUse(#[from] FilesInUse),
    #[error(transparent)]
    FileFormatIssues(#[from] FileFormatIssues),
    #[error(transparent)]
    MissingFolders(#[from] MissingFolders),
    #[error(transparent)]
    MissingInputFiles(#[from] MissingInputFiles),
    #[error(transparent)]
    FailedToGenerateReports(#[from] FailedToGenerateReports),
    #[error(transparent)]
    FailedToCreateSheets(#[from] FailedToCreateSheets),
    #[error(transparent)]
    FailedToGenerateFiles(#[from] FailedToGenerateFiles),
}

impl SemiFatalKind {
    pub fn tag(&self) -> KindTag {
        match self {
            SemiFatalKind::FilesInUse(_) => KindTag::FilesInUse,
            SemiFatalKind::FileFormatIssues(_) => KindTag::FileFormatIssues,
            SemiFatalKind::MissingFolders(_) => KindTag::MissingFolders,
            SemiFatalKind::MissingInputFiles(_) => KindTag::MissingInputFiles,
            SemiFatalKind::FailedToGenerateReports(_) => KindTag::FailedToGenerateReports,
            SemiFatalKind::FailedToCreateSheets(_) => KindTag::FailedToCreateSheets,
            SemiFatalKind::FailedToGenerateFiles(_) => KindTag::FailedToGenerateFiles,
        }
    }
}

impl From<SemiFatalKind> for ContainerKind {
    fn from(kind: SemiFatalKind) -> Self {
        match kind {
            SemiFatalKind::FilesInUse(c) => c.into(),
            SemiFatalKind::FileFormatIssues(c) => c.into(),
            SemiFatalKind::MissingFolders(c) => c.into(),
            SemiFatalKind::MissingInputFiles(c) => c.into(),
            SemiFatalKind::FailedToGenerateReports(c) => c.into(),
            SemiFatalKind::FailedToCreateSheets(c) => c.into(),
            SemiFatalKind::FailedToGenerateFiles(c) => c.into(),
        }
    }
}
