//! Leaf data of the runlog error ledger.
//!
//! Nothing in here knows about aggregation; these are the values that containers own and the
//! exporter emits.
pub mod kind;
pub mod record;
pub mod row;
pub mod timeline;

pub use kind::KindTag;
pub use record::ErrorRecord;
pub use row::LogRow;
pub use runlog_error::Severity;
pub use timeline::{free_instant, insert_unique, tick};

/// Instants are always UTC with nanosecond resolution.
pub type Instant = chrono::DateTime<chrono::Utc>;
