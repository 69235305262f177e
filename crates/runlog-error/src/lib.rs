pub mod config;
pub mod internal;
pub mod severity;
pub mod sink;

// public exports
pub use config::ConfigError;
pub use internal::InternalError;
pub use severity::Severity;
pub use sink::SinkError;

// common imports for submodules
use std::path::PathBuf;
use std::sync::Arc;

/// Failures of the engine itself.
///
/// These are never the errors being *recorded*; recorded errors travel as `runlog::Fault`
/// values and are aggregated, not propagated.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Internal(#[from] InternalError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl Error {
    /// Programming-logic failures, as opposed to bad input or a failing collaborator.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
