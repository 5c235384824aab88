//! JSON report formatter.

use std::io::Write;

use serde::Serialize;

use super::ReportFormatter;
use crate::results::{AggregateResult, Offense, Statistics};

/// Formats the report as a JSON document.
pub struct JsonFormatter {
    /// Pretty-print the output.
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    offenses: Vec<&'a Offense>,
    statistics: Statistics,
    clean: bool,
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, result: &AggregateResult, writer: &mut W) -> std::io::Result<()> {
        let report = Report {
            offenses: result.offenses().collect(),
            statistics: result.statistics(),
            clean: result.clean(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &report)?;
        } else {
            serde_json::to_writer(&mut *writer, &report)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
