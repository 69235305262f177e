//! Operator-facing views of an aggregator. All of them are recomputed from current state.
use std::fmt::Write as _;

use itertools::Itertools;
use runlog_core::Severity;

use crate::aggregator::Aggregator;

const CONCISE_BANNER_WIDTH: usize = 70;
const FATAL_BANNER_WIDTH: usize = 50;

pub const TRAILER: &str = "Please see log file for more details.";
pub const FATAL_TRAILER: &str = "Exiting application.";

/// Header printed above the containers of one severity.
pub fn severity_header(severity: Severity) -> &'static str {
    match severity {
        Severity::Fatal => "The application will close due to the following reasons:",
        Severity::SemiFatal => "The following exceptions stopped the main operation:",
        Severity::NonFatal => "The following nonfatal exceptions occurred at runtime:",
        Severity::System => "The following system exceptions occurred:",
    }
}

fn banner(out: &mut String, application: Option<&str>, width: usize) {
    if let Some(app) = application {
        let rule = "-".repeat(width);
        let _ = writeln!(out, "{rule}\n{app} Error:\n{rule}");
    }
}

impl Aggregator {
    /// Short summary of everything except Fatal errors; empty when there is nothing to say.
    pub fn concise_message(&self) -> String {
        let relevant = [Severity::SemiFatal, Severity::NonFatal, Severity::System];
        if !relevant.into_iter().any(|s| self.has_severity(s)) {
            return String::new();
        }

        let mut out = String::new();
        banner(&mut out, self.application(), CONCISE_BANNER_WIDTH);
        for severity in [Severity::SemiFatal, Severity::NonFatal] {
            if !self.has_severity(severity) {
                continue;
            }
            let _ = writeln!(out, "{}\n{{", severity_header(severity));
            for container in self.containers(severity) {
                let concise = container.concise_message().replace(['\n', '\t'], "");
                for piece in concise.split(',') {
                    let _ = writeln!(out, "\t{}", piece.trim());
                }
            }
            out.push_str("}\n");
        }
        let system = self.severity_element_count(Severity::System);
        if system > 0 {
            let _ = writeln!(out, "{system} system exceptions occurred.");
        }
        let _ = writeln!(out, "{TRAILER}");
        out
    }

    /// Reasons the application is about to close; empty unless a Fatal error was reported.
    pub fn fatal_message(&self) -> String {
        if !self.has_severity(Severity::Fatal) {
            return String::new();
        }

        let mut out = String::new();
        banner(&mut out, self.application(), FATAL_BANNER_WIDTH);
        let _ = writeln!(out, "{}\n{{", severity_header(Severity::Fatal));
        for container in self.containers(Severity::Fatal) {
            let _ = writeln!(out, "\t{}", container.concise_message());
            for line in container.detailed_message().lines() {
                let _ = writeln!(out, "\t\t{line}");
            }
        }
        out.push_str("}\n");
        out.push_str(FATAL_TRAILER);
        out
    }

    /// Every container's detailed rendering, severity by severity, then the system errors.
    pub fn full_report(&self) -> String {
        let mut sections: Vec<String> = Severity::CLASSIFIED
            .into_iter()
            .flat_map(|s| self.containers(s))
            .map(|c| c.detailed_message())
            .filter(|text| !text.is_empty())
            .collect();

        if self.has_severity(Severity::System) {
            let lines = self
                .system_errors()
                .map(|(_, rec)| format!("\t{}: {}\n", rec.field(0), rec.field(1)))
                .join("");
            sections.push(format!(
                "{}{}\n{{\n{lines}}}",
                Severity::System.indicator(),
                severity_header(Severity::System)
            ));
        }
        sections.join("\n")
    }
}
