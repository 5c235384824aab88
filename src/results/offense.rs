//! Canonical offense records and severity levels.

use serde::Serialize;
use std::str::FromStr;

/// Severity level for offenses and for the fail policy.
///
/// Ordering reflects report priority: `never < convention < warning <
/// error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported but never affects the exit code on its own.
    Never,
    /// Style conventions.
    Convention,
    /// Issues that should be addressed.
    Warning,
    /// Documentation errors.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Never => write!(f, "never"),
            Severity::Convention => write!(f, "convention"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never" => Ok(Severity::Never),
            "convention" => Ok(Severity::Convention),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(()),
        }
    }
}

/// What a finding is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OffenseKind {
    Line,
    Method,
    Class,
    Style,
}

impl std::fmt::Display for OffenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OffenseKind::Line => write!(f, "line"),
            OffenseKind::Method => write!(f, "method"),
            OffenseKind::Class => write!(f, "class"),
            OffenseKind::Style => write!(f, "style"),
        }
    }
}

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offense {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: OffenseKind,
    pub name: String,
    pub message: String,
    pub location: String,
    pub location_line: u32,
}
