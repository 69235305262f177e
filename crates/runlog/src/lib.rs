//! A run-time error ledger.
//!
//! Application code reports problems as [`Fault`]s: typed, severity-classified kinds from the
//! catalogue, or system errors raised outside it. An [`Aggregator`] deduplicates and merges
//! them, answers "should this operation stop?", renders short and detailed summaries, and
//! exports a strictly ordered log.
//!
//! ```rust,ignore
//! use runlog::{Aggregator, Fault, catalogue::FilesInUse};
//!
//! let mut agg = Aggregator::new();
//! agg.report(Fault::semi_fatal(FilesInUse::new("rates.csv", r"C:\in\rates.csv", "Loader::open()")));
//! if agg.should_abort_operation() {
//!     eprintln!("{}", agg.concise_message());
//! }
//! ```
pub mod aggregator;
pub mod catalogue;
pub mod config;
pub mod container;
pub mod export;
pub mod fatal;
pub mod fault;
pub mod non_fatal;
pub mod policy;
pub mod render;
pub mod semi_fatal;
pub mod settle;
pub mod sink;

pub use aggregator::Aggregator;
pub use config::{EmissionMode, LogFormat, LogOptions, RunlogConfig};
pub use container::{Container, ContainerException, ContainerKind, MergeOutcome, MergePolicy};
pub use fatal::FatalKind;
pub use fault::{Fault, SystemError, classify};
pub use non_fatal::NonFatalKind;
pub use policy::{CombinedPolicy, EmissionPolicy, NoopPolicy, TracingPolicy};
pub use semi_fatal::SemiFatalKind;
pub use settle::{Disposition, Presenter, RecordingPresenter, settle};
pub use sink::{LogSink, MemorySink, WriterSink};

pub use runlog_core::{ErrorRecord, Instant, KindTag, LogRow, tick};
pub use runlog_error::{Error, Result, Severity};
