use std::collections::BTreeMap;

use runlog_core::{Instant, LogRow, Severity, insert_unique};
use tracing::{debug, instrument};

use crate::aggregator::Aggregator;

impl Aggregator {
    /// Every leaf element as one row, strictly ordered by time and numbered `0..n`.
    ///
    /// Rows are gathered in severity order, then kind order, then each container's own row
    /// order, so equal timestamps always resolve the same way. A row whose timestamp is taken
    /// moves forward by one tick until it finds a free slot, and carries the slot it landed in.
    #[instrument(skip_all, fields(run = %self.id()))]
    pub fn chronological_rows(&self) -> Vec<LogRow> {
        let mut ordered: BTreeMap<Instant, LogRow> = BTreeMap::new();

        for severity in Severity::CLASSIFIED {
            for container in self.containers(severity) {
                for row in container.to_log_rows() {
                    insert_unique(&mut ordered, row.timestamp, row);
                }
            }
        }
        for (at, record) in self.system_errors() {
            let text = format!(
                "{}{}: {}",
                Severity::System.indicator(),
                record.field(0),
                record.field(1)
            );
            insert_unique(&mut ordered, *at, LogRow::for_record(text, 0, record));
        }

        let rows: Vec<LogRow> = ordered
            .into_iter()
            .enumerate()
            .map(|(sequence, (at, row))| LogRow {
                sequence,
                timestamp: at,
                ..row
            })
            .collect();
        debug!(rows = rows.len(), "exported chronological log");
        rows
    }
}
