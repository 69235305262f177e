use runlog_core::KindTag;

use crate::catalogue::{
    FileFormatIssues, FilesInUse, GenericValueErrors, MissingCalibers, MissingCurves,
    MissingInflationIndices,
};
use crate::container::ContainerKind;

/// Kinds worth telling the operator about that do not stop anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NonFatalKind {
    #[error(transparent)]
    FilesInUse(#[from] FilesInUse),
    #[error(transparent)]
    FileFormatIssues(#[from] FileFormatIssues),
    #[error(transparent)]
    GenericValueErrors(#[from] GenericValueErrors),
    #[error(transparent)]
    MissingCalibers(#[from] MissingCalibers),
    #[error(transparent)]
    MissingCurves(#[from] MissingCurves),
    #[error(transparent)]
    MissingInflationIndices(#[from] MissingInflationIndices),
}

impl NonFatalKind {
    pub fn tag(&self) -> KindTag {
        match self {
            NonFatalKind::FilesInUse(_) => KindTag::FilesInUse,
            NonFatalKind::FileFormatIssues(_) => KindTag::FileFormatIssues,
            NonFatalKind::GenericValueErrors(_) => KindTag::GenericValueErrors,
            NonFatalKind::MissingCalibers(_) => KindTag::MissingCalibers,
            NonFatalKind::MissingCurves(_) => KindTag::MissingCurves,
            NonFatalKind::MissingInflationIndices(_) => KindTag::MissingInflationIndices,
        }
    }
}

impl From<NonFatalKind> for ContainerKind {
    fn from(kind: NonFatalKind) -> Self {
        match kind {
            NonFatalKind::FilesInUse(c) => c.into(),
            NonFatalKind::FileFormatIssues(c) => c.into(),
            NonFatalKind::GenericValueErrors(c) => c.into(),
            NonFatalKind::MissingCalibers(c) => c.into(),
            NonFatalKind::MissingCurves(c) => c.into(),
            NonFatalKind::MissingInflationIndices(c) => c.into(),
        }
    }
}
