//! The per-run error ledger.
//!
//! Reports are classified and folded into one container per `(severity, kind)` pair, plus a
//! System bucket keyed by instant. Aggregators owned by separate units of work are combined
//! with [`Aggregator::merge`] at whatever join points the caller chooses.
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use runlog_core::{ErrorRecord, Instant, KindTag, Severity, free_instant};
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use crate::config::RunlogConfig;
use crate::container::{Container, ContainerKind};
use crate::fault::Fault;
use crate::policy::{EmissionPolicy, TracingPolicy};

#[derive(Clone)]
pub struct Aggregator {
    id: Uuid,
    application: Option<String>,
    buckets: BTreeMap<Severity, BTreeMap<KindTag, Container>>,
    system: BTreeMap<Instant, ErrorRecord>,
    policy: Arc<dyn EmissionPolicy>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator")
            .field("id", &self.id)
            .field("application", &self.application)
            .field("buckets", &self.buckets)
            .field("system", &self.system)
            .finish_non_exhaustive()
    }
}

impl Aggregator {
    /// Empty ledger that emits every report through `tracing`.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            application: None,
            buckets: BTreeMap::new(),
            system: BTreeMap::new(),
            policy: Arc::new(TracingPolicy),
        }
    }

    pub fn from_config(config: &RunlogConfig) -> Self {
        let mut agg = Self::new().with_policy(config.emission.policy());
        agg.application = config.application_name().map(str::to_string);
        agg
    }

    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn EmissionPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Correlates everything this ledger emits.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn application(&self) -> Option<&str> {
        self.application.as_deref()
    }

    /// Record `fault` as of now; returns the severity it was filed under.
    pub fn report(&mut self, fault: impl Into<Fault>) -> Severity {
        self.report_at(fault, Utc::now())
    }

    /// [`Aggregator::report`] with an explicit current instant.
    ///
    /// The instant only matters for system errors, which are keyed by it. Taxonomy kinds keep
    /// the timestamps of their own records.
    #[instrument(skip_all, fields(run = %self.id))]
    pub fn report_at(&mut self, fault: impl Into<Fault>, now: Instant) -> Severity {
        let fault = fault.into();
        let severity = fault.severity();
        self.policy.emit(&fault, severity);

        match fault {
            Fault::System(err) => {
                let key = free_instant(&self.system, now);
                self.system.insert(key, err.record_at(key));
                trace!(%key, "system error recorded");
            }
            Fault::Fatal(kind) => self.absorb(Container::new(severity, kind)),
            Fault::SemiFatal(kind) => self.absorb(Container::new(severity, kind)),
            Fault::NonFatal(kind) => self.absorb(Container::new(severity, kind)),
        }
        severity
    }

    fn absorb(&mut self, incoming: Container) {
        let severity = incoming.severity();
        let tag = incoming.tag();
        match self.buckets.entry(severity).or_default().entry(tag) {
            Entry::Vacant(slot) => {
                trace!(%severity, %tag, "new container");
                slot.insert(incoming);
            }
            Entry::Occupied(mut slot) => {
                let outcome = slot.get_mut().merge(&incoming);
                trace!(%severity, %tag, ?outcome, "merged into existing container");
            }
        }
    }

    /// Fold every container and system error of `other` into `self`; `other` is untouched.
    #[instrument(skip_all, fields(run = %self.id, other = %other.id))]
    pub fn merge(&mut self, other: &Aggregator) {
        for container in other.buckets.values().flat_map(BTreeMap::values) {
            self.absorb(container.clone());
        }
        for (at, record) in &other.system {
            let key = free_instant(&self.system, *at);
            let record = if key == *at {
                record.clone()
            } else {
                ErrorRecord::at(record.origin(), key, record.fields().iter().cloned())
            };
            self.system.insert(key, record);
        }
        debug!(elements = self.element_count(), "merged aggregator");
    }

    /// Leaf elements across every container plus the System bucket.
    pub fn element_count(&self) -> usize {
        self.buckets
            .keys()
            .map(|s| self.severity_element_count(*s))
            .sum::<usize>()
            + self.system.len()
    }

    pub fn severity_element_count(&self, severity: Severity) -> usize {
        if severity == Severity::System {
            return self.system.len();
        }
        self.buckets
            .get(&severity)
            .map(|bucket| bucket.values().map(Container::element_count).sum())
            .unwrap_or(0)
    }

    pub fn has_severity(&self, severity: Severity) -> bool {
        self.severity_element_count(severity) > 0
    }

    pub fn has_errors(&self) -> bool {
        Severity::ALL.into_iter().any(|s| self.has_severity(s))
    }

    /// Whether the current multi-step operation should stop. Unknown (System) errors count.
    pub fn should_abort_operation(&self) -> bool {
        Severity::ALL
            .into_iter()
            .filter(|s| s.is_blocking())
            .any(|s| self.has_severity(s))
    }

    /// Number of non-empty kinds filed under `severity`; for System, the number of entries.
    pub fn kind_count(&self, severity: Severity) -> usize {
        if severity == Severity::System {
            return self.system.len();
        }
        self.containers(severity).count()
    }

    pub fn container(&self, severity: Severity, tag: KindTag) -> Option<&Container> {
        self.buckets
            .get(&severity)
            .and_then(|bucket| bucket.get(&tag))
            .filter(|c| !c.is_empty())
    }

    /// Non-empty containers at `severity`, in kind order.
    pub fn containers(&self, severity: Severity) -> impl Iterator<Item = &Container> {
        self.buckets
            .get(&severity)
            .into_iter()
            .flat_map(BTreeMap::values)
            .filter(|c| !c.is_empty())
    }

    /// Downcast helper for callers that know which kind they are after.
    pub fn kind(&self, severity: Severity, tag: KindTag) -> Option<&ContainerKind> {
        self.container(severity, tag).map(Container::kind)
    }

    /// System errors in instant order.
    pub fn system_errors(&self) -> impl Iterator<Item = (&Instant, &ErrorRecord)> {
        self.system.iter()
    }

    pub fn clear(&mut self) {
        debug!(run = %self.id, elements = self.element_count(), "clearing aggregator");
        self.buckets.clear();
        self.system.clear();
    }
}
