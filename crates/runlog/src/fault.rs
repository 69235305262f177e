//! What callers report.
//!
//! A [`Fault`] is either one of the taxonomy's kinds, already placed at a severity by the
//! enum it lives in, or a [`SystemError`] wrapping anything raised outside the taxonomy.
use runlog_core::{ErrorRecord, Instant, KindTag, Severity};

use crate::fatal::FatalKind;
use crate::non_fatal::NonFatalKind;
use crate::semi_fatal::SemiFatalKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Fault {
    #[error(transparent)]
    Fatal(#[from] FatalKind),
    #[error(transparent)]
    SemiFatal(#[from] SemiFatalKind),
    #[error(transparent)]
    NonFatal(#[from] NonFatalKind),
    #[error(transparent)]
    System(#[from] SystemError),
}

impl Fault {
    pub fn fatal(kind: impl Into<FatalKind>) -> Self {
        Fault::Fatal(kind.into())
    }

    pub fn semi_fatal(kind: impl Into<SemiFatalKind>) -> Self {
        Fault::SemiFatal(kind.into())
    }

    pub fn non_fatal(kind: impl Into<NonFatalKind>) -> Self {
        Fault::NonFatal(kind.into())
    }

    /// Wrap an error raised outside the taxonomy.
    pub fn system<E: std::error::Error + 'static>(error: &E) -> Self {
        Fault::System(SystemError::from_error(error))
    }

    pub fn severity(&self) -> Severity {
        classify(self)
    }

    /// `None` for system errors, which carry no kind.
    pub fn tag(&self) -> Option<KindTag> {
        match self {
            Fault::Fatal(k) => Some(k.tag()),
            Fault::SemiFatal(k) => Some(k.tag()),
            Fault::NonFatal(k) => Some(k.tag()),
            Fault::System(_) => None,
        }
    }
}

impl From<std::io::Error> for Fault {
    fn from(e: std::io::Error) -> Self {
        Fault::system(&e)
    }
}

/// Severity of `fault`, decided by its declared kind alone.
pub fn classify(fault: &Fault) -> Severity {
    match fault {
        Fault::Fatal(_) => Severity::Fatal,
        Fault::SemiFatal(_) => Severity::SemiFatal,
        Fault::NonFatal(_) => Severity::NonFatal,
        Fault::System(_) => Severity::System,
    }
}

/// An error that did not come through the taxonomy.
///
/// Only its type name and message survive; the original value is not kept, so system errors
/// stay `Clone` and `Send` whatever they wrapped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{type_name}: {message}")]
pub struct SystemError {
    type_name: String,
    message: String,
    origin: Option<String>,
}

impl SystemError {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            origin: None,
        }
    }

    pub fn from_error<E: std::error::Error + 'static>(error: &E) -> Self {
        Self::new(std::any::type_name::<E>(), error.to_string())
    }

    /// Name the function that caught the error.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Leaf record for the System bucket. Fields: `[type name, message]`.
    pub fn record_at(&self, at: Instant) -> ErrorRecord {
        ErrorRecord::at(
            self.origin.as_deref().unwrap_or("<unknown>"),
            at,
            [self.type_name.as_str(), self.message.as_str()],
        )
    }
}
