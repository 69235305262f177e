#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalError {
    /// A severity outside the closed taxonomy was requested.
    #[error("Severity is not part of the error taxonomy: {0}")]
    UnknownSeverity(String),
}
