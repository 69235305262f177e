//! Closed classification of reported errors.
//!
//! - Fatal: the operation and the process must stop
//! - SemiFatal: the current multi-step operation must abort, the process continues
//! - NonFatal: informational, the operation proceeds
//! - System: raised outside the taxonomy; treated as blocking like Fatal/SemiFatal
use std::fmt;
use std::str::FromStr;

use crate::InternalError;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Fatal,
    SemiFatal,
    NonFatal,
    System,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Fatal,
        Severity::SemiFatal,
        Severity::NonFatal,
        Severity::System,
    ];

    /// Severities that are produced through the taxonomy and therefore own containers.
    pub const CLASSIFIED: [Severity; 3] =
        [Severity::Fatal, Severity::SemiFatal, Severity::NonFatal];

    /// Whether an error of this severity stops the current operation.
    pub fn is_blocking(self) -> bool {
        !matches!(self, Severity::NonFatal)
    }

    /// Prefix used on every log row of this severity.
    pub fn indicator(self) -> &'static str {
        match self {
            Severity::Fatal => "(Fatal) ",
            Severity::SemiFatal => "(SemiFatal) ",
            Severity::NonFatal => "(NonFatal) ",
            Severity::System => "(System) ",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "Fatal",
            Severity::SemiFatal => "SemiFatal",
            Severity::NonFatal => "NonFatal",
            Severity::System => "System",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InternalError::UnknownSeverity(s.to_string()))
    }
}

impl TryFrom<u8> for Severity {
    type Error = InternalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Severity::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| InternalError::UnknownSeverity(format!("discriminant {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_nonfatal_is_non_blocking() {
        let blocking: Vec<_> = Severity::ALL
            .into_iter()
            .filter(|s| s.is_blocking())
            .collect();
        assert_eq!(
            blocking,
            vec![Severity::Fatal, Severity::SemiFatal, Severity::System]
        );
    }

    #[test]
    fn parses_known_names_case_insensitively() {
        assert_eq!("semifatal".parse::<Severity>(), Ok(Severity::SemiFatal));
        assert_eq!(" System ".parse::<Severity>(), Ok(Severity::System));
    }

    #[test]
    fn unknown_severity_is_an_internal_error() {
        let err = "Warning".parse::<Severity>().unwrap_err();
        assert_eq!(err, InternalError::UnknownSeverity("Warning".into()));

        let err = Severity::try_from(4u8).unwrap_err();
        assert!(matches!(err, InternalError::UnknownSeverity(_)));
        assert_eq!(Severity::try_from(2u8), Ok(Severity::NonFatal));
    }

    #[test]
    fn unknown_severity_lifts_into_the_engine_error() {
        fn parse(s: &str) -> crate::Result<Severity> {
            Ok(s.parse::<Severity>()?)
        }
        let err = parse("Warning").unwrap_err();
        assert!(err.is_internal());
        assert!(matches!(
            err,
            crate::Error::Internal(InternalError::UnknownSeverity(ref s)) if s == "Warning"
        ));
        assert_eq!(parse("Fatal").ok(), Some(Severity::Fatal));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&Severity::SemiFatal).expect("serialize");
        assert_eq!(json, "\"SemiFatal\"");
    }
}
