//! End-of-operation handling: tell the operator, hand the log over, decide what happens next.
//!
//! Nothing here exits the process. [`settle`] returns a [`Disposition`] and the caller acts
//! on it.
use runlog_core::Severity;
use runlog_error::Result;
use tracing::{info, instrument, warn};

use crate::aggregator::Aggregator;
use crate::sink::LogSink;

/// Receives the operator-facing summaries (a message box, a console, a test double).
pub trait Presenter {
    fn show(&mut self, message: &str);
}

/// Collects every shown message.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub shown: Vec<String>,
}

impl Presenter for RecordingPresenter {
    fn show(&mut self, message: &str) {
        self.shown.push(message.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Continue,
    /// Stop the current multi-step operation; the process may carry on.
    AbortOperation,
    /// Terminate abnormally. The full log has already been written to the sink.
    Terminate,
}

/// Present what was collected and decide how to proceed.
///
/// The concise view is shown when SemiFatal or NonFatal errors exist. On any Fatal error the
/// fatal view is shown and the chronological log is written to `sink` before
/// [`Disposition::Terminate`] is returned; a failing sink is returned as an error instead.
#[instrument(skip_all, fields(run = %agg.id()))]
pub fn settle(
    agg: &Aggregator,
    presenter: &mut dyn Presenter,
    sink: &mut dyn LogSink,
) -> Result<Disposition> {
    if agg.has_severity(Severity::SemiFatal) || agg.has_severity(Severity::NonFatal) {
        presenter.show(&agg.concise_message());
    }

    if agg.has_severity(Severity::Fatal) {
        presenter.show(&agg.fatal_message());
        let rows = agg.chronological_rows();
        sink.write_rows(&rows)?;
        warn!(rows = rows.len(), "fatal errors reported; terminating");
        return Ok(Disposition::Terminate);
    }

    let disposition = if agg.should_abort_operation() {
        Disposition::AbortOperation
    } else {
        Disposition::Continue
    };
    info!(?disposition, elements = agg.element_count(), "settled");
    Ok(disposition)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalogue::{GenericValueErrors, MissingConfigFiles, MissingInputFiles};
    use crate::fault::Fault;
    use crate::policy::NoopPolicy;
    use crate::sink::MemorySink;
    use runlog_core::LogRow;
    use runlog_error::{Error, SinkError};

    fn quiet() -> Aggregator {
        Aggregator::new().with_policy(Arc::new(NoopPolicy))
    }

    #[test]
    fn clean_run_continues_silently() {
        let mut presenter = RecordingPresenter::default();
        let mut sink = MemorySink::new();
        let d = settle(&quiet(), &mut presenter, &mut sink).expect("settle");
        assert_eq!(d, Disposition::Continue);
        assert!(presenter.shown.is_empty());
        assert!(sink.rows().is_empty());
    }

    #[test]
    fn non_fatal_only_shows_summary_and_continues() {
        let mut agg = quiet();
        agg.report(Fault::non_fatal(GenericValueErrors::new("bad", "parse()")));
        let mut presenter = RecordingPresenter::default();
        let mut sink = MemorySink::new();

        assert_eq!(
            settle(&agg, &mut presenter, &mut sink).expect("settle"),
            Disposition::Continue
        );
        assert_eq!(presenter.shown.len(), 1);
        assert!(sink.rows().is_empty());
    }

    #[test]
    fn semi_fatal_aborts_the_operation() {
        let mut agg = quiet();
        agg.report(Fault::semi_fatal(MissingInputFiles::new("r.csv", "in/r.csv", "load()", "")));
        let mut presenter = RecordingPresenter::default();
        let d = settle(&agg, &mut presenter, &mut MemorySink::new()).expect("settle");
        assert_eq!(d, Disposition::AbortOperation);
    }

    #[test]
    fn system_only_aborts_without_a_prompt() {
        let mut agg = quiet();
        agg.report(std::io::Error::other("disk"));
        let mut presenter = RecordingPresenter::default();
        let d = settle(&agg, &mut presenter, &mut MemorySink::new()).expect("settle");
        assert_eq!(d, Disposition::AbortOperation);
        assert!(presenter.shown.is_empty());
    }

    #[test]
    fn fatal_writes_the_log_before_terminating() {
        let mut agg = quiet();
        agg.report(Fault::fatal(MissingConfigFiles::new("a.toml", "cfg/a.toml", "main()", "")));
        agg.report(Fault::non_fatal(GenericValueErrors::new("bad", "parse()")));
        let mut presenter = RecordingPresenter::default();
        let mut sink = MemorySink::new();

        let d = settle(&agg, &mut presenter, &mut sink).expect("settle");
        assert_eq!(d, Disposition::Terminate);
        assert_eq!(presenter.shown.len(), 2);
        assert!(presenter.shown[1].ends_with("Exiting application."));
        assert_eq!(sink.rows().len(), 2);
    }

    #[test]
    fn sink_failure_is_propagated() {
        struct Refusing;
        impl LogSink for Refusing {
            fn write_rows(&mut self, _: &[LogRow]) -> std::result::Result<(), SinkError> {
                Err(SinkError::Write("read-only volume".into()))
            }
        }

        let mut agg = quiet();
        agg.report(Fault::fatal(MissingConfigFiles::new("a.toml", "cfg/a.toml", "main()", "")));
        let err = settle(&agg, &mut RecordingPresenter::default(), &mut Refusing).unwrap_err();
        assert!(matches!(err, Error::Sink(SinkError::Write(_))));
    }
}
