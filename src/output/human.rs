//! Human-readable report formatter.
//!
//! Formats offenses for terminal display with optional color support.

use std::io::Write;

use super::ReportFormatter;
use crate::results::{AggregateResult, Severity};

/// Formats the report for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, severity: Severity) -> String {
        if !self.use_color {
            return severity.to_string();
        }
        let code = match severity {
            Severity::Error => "31",
            Severity::Warning => "33",
            Severity::Convention => "36",
            Severity::Never => "2",
        };
        format!("\x1b[{code}m{severity}\x1b[0m")
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, result: &AggregateResult, writer: &mut W) -> std::io::Result<()> {
        for offense in result.offenses() {
            writeln!(
                writer,
                "{}[{}]: {}",
                self.paint(offense.severity),
                offense.name,
                offense.message
            )?;
            writeln!(
                writer,
                "  --> {}:{}",
                offense.location, offense.location_line
            )?;
        }

        if !result.clean() {
            writeln!(writer)?;
        }

        let stats = result.statistics();
        writeln!(
            writer,
            "{} offense(s) found ({} error(s), {} warning(s), {} convention(s))",
            stats.total, stats.error, stats.warning, stats.convention
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EffectiveConfig;
    use crate::results::{Offense, OffenseKind, ValidatorOffenses};

    fn result() -> AggregateResult {
        AggregateResult::new(
            vec![ValidatorOffenses {
                validator: "Documentation/UndocumentedObjects",
                offenses: vec![Offense {
                    severity: Severity::Warning,
                    kind: OffenseKind::Line,
                    name: "UndocumentedObject".into(),
                    message: "Documentation required for `Foo`".into(),
                    location: "/proj/a.rb".into(),
                    location_line: 3,
                }],
            }],
            EffectiveConfig::empty(),
        )
    }

    #[test]
    fn renders_offense_location_and_summary() {
        let mut out = Vec::new();
        HumanFormatter::new(false).format(&result(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("warning[UndocumentedObject]: Documentation required for `Foo`"));
        assert!(text.contains("  --> /proj/a.rb:3"));
        assert!(text.contains("1 offense(s) found (0 error(s), 1 warning(s), 0 convention(s))"));
    }

    #[test]
    fn clean_result_prints_zero_summary() {
        let clean = AggregateResult::new(Vec::new(), EffectiveConfig::empty());
        let mut out = Vec::new();
        HumanFormatter::new(false).format(&clean, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("0 offense(s) found"));
    }

    #[test]
    fn color_wraps_severity_in_ansi_codes() {
        let mut out = Vec::new();
        HumanFormatter::new(true).format(&result(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\x1b[33mwarning\x1b[0m"));
    }
}
