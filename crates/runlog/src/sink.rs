//! Where exported rows go.
//!
//! Sinks only serialise rows; opening, naming and rotating log files is the caller's business.
use std::io::Write;

use runlog_core::LogRow;
use runlog_error::SinkError;

use crate::config::{LogFormat, LogOptions};

pub trait LogSink {
    fn write_rows(&mut self, rows: &[LogRow]) -> Result<(), SinkError>;
}

/// Serialises rows onto any [`Write`] as tab separated values or JSON lines.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    options: LogOptions,
}

pub const TSV_HEADER: &str = "sequence\ttimestamp\torigin\ttext";

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, options: LogOptions) -> Self {
        Self { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_tsv(&mut self, rows: &[LogRow]) -> Result<(), SinkError> {
        if self.options.include_header {
            writeln!(self.writer, "{TSV_HEADER}")?;
        }
        for row in rows {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}",
                row.sequence,
                row.timestamp.to_rfc3339(),
                tsv_cell(&row.origin),
                tsv_cell(&row.text)
            )?;
        }
        Ok(())
    }

    fn write_json_lines(&mut self, rows: &[LogRow]) -> Result<(), SinkError> {
        for row in rows {
            let line = serde_json::to_string(row).map_err(|e| SinkError::Serialize {
                sequence: row.sequence,
                message: e.to_string(),
            })?;
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }
}

/// Row text may span lines; one row must stay one line.
fn tsv_cell(value: &str) -> String {
    value.replace('\t', "\\t").replace('\n', "\\n")
}

impl<W: Write> LogSink for WriterSink<W> {
    fn write_rows(&mut self, rows: &[LogRow]) -> Result<(), SinkError> {
        match self.options.format {
            LogFormat::Tsv => self.write_tsv(rows)?,
            LogFormat::JsonLines => self.write_json_lines(rows)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every row it is given.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    rows: Vec<LogRow>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[LogRow] {
        &self.rows
    }
}

impl LogSink for MemorySink {
    fn write_rows(&mut self, rows: &[LogRow]) -> Result<(), SinkError> {
        self.rows.extend_from_slice(rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn rows() -> Vec<LogRow> {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        vec![
            LogRow::new("(NonFatal) Runtime error: { bad }", 0, at, "parse()"),
            LogRow::new("(System) io: one\ttwo", 1, at, "<unknown>"),
        ]
    }

    #[test]
    fn tsv_with_header() {
        let mut sink = WriterSink::new(Vec::new(), LogOptions::default());
        sink.write_rows(&rows()).expect("write");
        let out = String::from_utf8(sink.into_inner()).expect("utf8");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], TSV_HEADER);
        assert_eq!(
            lines[1],
            "0\t2024-01-02T03:04:05+00:00\tparse()\t(NonFatal) Runtime error: { bad }"
        );
        assert!(lines[2].ends_with("(System) io: one\\ttwo"));
    }

    #[test]
    fn json_lines_round_trip_through_serde() {
        let options = LogOptions {
            format: LogFormat::JsonLines,
            include_header: true,
        };
        let mut sink = WriterSink::new(Vec::new(), options);
        sink.write_rows(&rows()).expect("write");
        let out = String::from_utf8(sink.into_inner()).expect("utf8");

        let parsed: Vec<LogRow> = out
            .lines()
            .map(|l| serde_json::from_str(l).expect("row"))
            .collect();
        assert_eq!(parsed, rows());
    }

    #[test]
    fn failing_writer_surfaces_a_sink_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("pipe closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = WriterSink::new(Broken, LogOptions::default());
        let err = sink.write_rows(&rows()).unwrap_err();
        assert!(matches!(err, SinkError::Write(msg) if msg.contains("pipe closed")));
    }
}
