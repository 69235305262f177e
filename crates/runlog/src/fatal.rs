use runlog_core::KindTag;

use crate::catalogue::{FileFormatIssues, FilesInUse, MissingConfigFiles, MissingFolders};
use crate::container::ContainerKind;

/// Kinds that stop the operation and the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FatalKind {
    #[error(transparent)]
    FilesInUse(#[from] FilesInUse),
    #[error(transparent)]
    FileFormatIssues(#[from] FileFormatIssues),
    #[error(transparent)]
    MissingFolders(#[from] MissingFolders),
    #[error(transparent)]
    MissingConfigFiles(#[from] MissingConfigFiles),
}

impl FatalKind {
    pub fn tag(&self) -> KindTag {
        match self {
            FatalKind::FilesInUse(_) => KindTag::FilesInUse,
            FatalKind::FileFormatIssues(_) => KindTag::FileFormatIssues,
            FatalKind::MissingFolders(_) => KindTag::MissingFolders,
            FatalKind::MissingConfigFiles(_) => KindTag::MissingConfigFiles,
        }
    }
}

impl From<FatalKind> for ContainerKind {
    fn from(kind: FatalKind) -> Self {
        match kind {
            FatalKind::FilesInUse(c) => c.into(),
            FatalKind::FileFormatIssues(c) => c.into(),
            FatalKind::MissingFolders(c) => c.into(),
            FatalKind::MissingConfigFiles(c) => c.into(),
        }
    }
}
