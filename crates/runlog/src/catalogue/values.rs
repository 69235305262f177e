use runlog_core::{ErrorRecord, KindTag, LogRow, Severity};

use crate::container::{ContainerException, MergePolicy, block, numbered};

/// Conversion failures and similar programming-logic slips.
///
/// There is no dedup key: every report is a separate element, so merging the same container
/// twice doubles its count. Record fields: `[message]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericValueErrors {
    messages: Vec<ErrorRecord>,
}

impl GenericValueErrors {
    pub fn new(message: impl Into<String>, origin: impl Into<String>) -> Self {
        Self::from_record(ErrorRecord::with_fields(origin, vec![message.into()]))
    }

    pub fn from_record(record: ErrorRecord) -> Self {
        Self {
            messages: vec![record],
        }
    }
}

impl ContainerException for GenericValueErrors {
    const TAG: KindTag = KindTag::GenericValueErrors;
    const POLICY: MergePolicy = MergePolicy::AppendAll;

    fn element_count(&self) -> usize {
        self.messages.len()
    }

    fn merge(&mut self, other: &Self) {
        self.messages.extend(other.messages.iter().cloned());
    }

    fn to_log_rows(&self, severity: Severity) -> Vec<LogRow> {
        numbered(
            severity,
            self.messages
                .iter()
                .map(|rec| (format!("Runtime error: {{ {} }}", rec.field(0)), rec)),
        )
    }

    fn concise_message(&self) -> String {
        if self.messages.is_empty() {
            return String::new();
        }
        format!(
            "{} run time programming logic issues occurred.",
            self.messages.len()
        )
    }

    fn detailed_message(&self, severity: Severity) -> String {
        block(
            severity,
            "The following programming issues occurred at run time:",
            self.messages.iter().map(|rec| rec.field(0).to_string()),
        )
    }
}
