//! Static validator catalog.
//!
//! Every validator is described once, at compile time, by an immutable
//! [`ValidatorDescriptor`]: its identity, department, defaults, command
//! builder, parser list, and offense shape. Composite validators carry
//! their child names as data ([`ValidatorKind::Composite`]); nothing is
//! discovered at runtime.

use std::path::PathBuf;

use crate::config::EffectiveConfig;
use crate::parsers::{OffenseCandidate, ParserFn};
use crate::results::offense::{OffenseKind, Severity};
use crate::validators;

/// Builds the external command for one validator over a file selection.
pub type CommandBuilder = fn(&EffectiveConfig, &[PathBuf]) -> String;

/// Builds the human-readable message for one candidate.
pub type MessageBuilder = fn(&OffenseCandidate) -> String;

/// Whether a validator stands alone or folds children into itself.
#[derive(Debug, Clone, Copy)]
pub enum ValidatorKind {
    Standard,
    /// Offenses of the listed validators are reported under this one's
    /// identity; the children never surface at top level.
    Composite { children: &'static [&'static str] },
}

/// Default shape of the offenses a validator family emits.
#[derive(Clone, Copy)]
pub struct OffenseSpec {
    pub kind: OffenseKind,
    /// Family default name; candidates carrying a dynamic sub-kind
    /// override it.
    pub name: &'static str,
    pub message: MessageBuilder,
}

/// Immutable description of one validator, registered at startup.
#[derive(Clone, Copy)]
pub struct ValidatorDescriptor {
    /// Full name, `Department/Validator`.
    pub name: &'static str,
    /// Unique snake_case identifier keying raw command output.
    pub ident: &'static str,
    pub department: &'static str,
    pub kind: ValidatorKind,
    pub enabled_by_default: bool,
    /// `None` falls through to the department default.
    pub default_severity: Option<Severity>,
    /// Family-specific config defaults (all string lists).
    pub extra_defaults: &'static [(&'static str, &'static [&'static str])],
    pub command: CommandBuilder,
    pub parsers: &'static [ParserFn],
    pub offense: OffenseSpec,
}

impl std::fmt::Debug for ValidatorDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorDescriptor")
            .field("name", &self.name)
            .field("ident", &self.ident)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Departments in registry order with their default severities.
pub static DEPARTMENTS: &[(&str, Severity)] = &[
    ("Documentation", Severity::Warning),
    ("Tags", Severity::Warning),
    ("Warnings", Severity::Error),
    ("Semantic", Severity::Warning),
];

/// All validators in declared (department) order. This order is the
/// execution and report order.
static ALL: &[ValidatorDescriptor] = &[
    validators::documentation::UNDOCUMENTED_OBJECTS,
    validators::documentation::UNDOCUMENTED_METHOD_ARGUMENTS,
    validators::documentation::UNDOCUMENTED_BOOLEAN_METHODS,
    validators::tags::INVALID_TYPES,
    validators::tags::ORDER,
    validators::tags::API_TAGS,
    validators::tags::OPTION_TAGS,
    validators::warnings::UNKNOWN_TAG,
    validators::warnings::UNKNOWN_DIRECTIVE,
    validators::warnings::INVALID_TAG_FORMAT,
    validators::warnings::INVALID_DIRECTIVE_FORMAT,
    validators::warnings::DUPLICATED_PARAMETER_NAME,
    validators::warnings::UNKNOWN_PARAMETER_NAME,
    validators::semantic::ABSTRACT_METHODS,
];

/// All registered validators, in execution order.
pub fn all() -> &'static [ValidatorDescriptor] {
    ALL
}

/// Look up a validator by its full `Department/Validator` name.
pub fn find(name: &str) -> Option<&'static ValidatorDescriptor> {
    ALL.iter().find(|d| d.name == name)
}

/// Default severity of a department (global default: warning).
pub fn department_severity(department: &str) -> Severity {
    DEPARTMENTS
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, severity)| *severity)
        .unwrap_or(Severity::Warning)
}

/// Whether `name` is declared as a child of some composite validator.
pub fn is_composite_child(name: &str) -> bool {
    ALL.iter().any(|d| match d.kind {
        ValidatorKind::Composite { children } => children.contains(&name),
        ValidatorKind::Standard => false,
    })
}
