//! How each report is surfaced as it happens.
//!
//! The aggregator never logs a report directly; it hands every [`Fault`] to the installed
//! [`EmissionPolicy`] together with the severity it was classified at. The application picks
//! the policy, usually through [`crate::RunlogConfig`].
use runlog_core::Severity;

use crate::fault::Fault;

pub trait EmissionPolicy: Send + Sync {
    fn emit(&self, fault: &Fault, severity: Severity);
}

/// Emits nothing.
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl EmissionPolicy for NoopPolicy {
    fn emit(&self, _fault: &Fault, _severity: Severity) {}
}

/// One `tracing` event per report; the level follows the severity.
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

impl EmissionPolicy for TracingPolicy {
    fn emit(&self, fault: &Fault, severity: Severity) {
        use tracing::{Level, event};

        let kind = fault.tag().map(|t| t.as_str()).unwrap_or("System");
        match severity {
            Severity::Fatal | Severity::System => {
                event!(Level::ERROR, %severity, kind, error = %fault)
            }
            Severity::SemiFatal => event!(Level::WARN, %severity, kind, error = %fault),
            Severity::NonFatal => event!(Level::INFO, %severity, kind, error = %fault),
        }
    }
}

/// Fans every report out to each inner policy, in insertion order.
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn EmissionPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn push<P: EmissionPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl EmissionPolicy for CombinedPolicy {
    fn emit(&self, fault: &Fault, severity: Severity) {
        for p in &self.policies {
            p.emit(fault, severity);
        }
    }
}

impl std::fmt::Debug for CombinedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedPolicy")
            .field("policies", &self.policies.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::GenericValueErrors;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recording(Arc<Mutex<Vec<Severity>>>);

    impl EmissionPolicy for Recording {
        fn emit(&self, _fault: &Fault, severity: Severity) {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(severity);
            }
        }
    }

    #[test]
    fn combined_policy_reaches_every_inner_policy() {
        let first = Recording::default();
        let second = Recording::default();
        let combined = CombinedPolicy::new()
            .push(first.clone())
            .push(NoopPolicy)
            .push(second.clone());
        assert_eq!(combined.len(), 3);

        let fault = Fault::non_fatal(GenericValueErrors::new("bad value", "parse()"));
        combined.emit(&fault, Severity::NonFatal);

        assert_eq!(*first.0.lock().unwrap(), vec![Severity::NonFatal]);
        assert_eq!(*second.0.lock().unwrap(), vec![Severity::NonFatal]);
    }

    #[test]
    fn tracing_policy_emits_without_a_subscriber() {
        let fault = Fault::from(std::io::Error::other("disk gone"));
        TracingPolicy.emit(&fault, Severity::System);
    }
}
