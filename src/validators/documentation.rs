//! Documentation department: missing docstrings and argument docs.

use std::path::PathBuf;

use crate::config::EffectiveConfig;
use crate::parsers::{self, OffenseCandidate, ParserFn};
use crate::registry::{OffenseSpec, ValidatorDescriptor, ValidatorKind};
use crate::results::offense::{OffenseKind, Severity};

use super::yard_list_command;

/// Reports objects with blank docstrings. Composite: boolean-method
/// findings fold into this validator's collection.
pub const UNDOCUMENTED_OBJECTS: ValidatorDescriptor = ValidatorDescriptor {
    name: "Documentation/UndocumentedObjects",
    ident: "undocumented_objects",
    department: "Documentation",
    kind: ValidatorKind::Composite {
        children: &["Documentation/UndocumentedBooleanMethods"],
    },
    enabled_by_default: true,
    default_severity: Some(Severity::Warning),
    extra_defaults: &[],
    command: undocumented_objects_command,
    parsers: &[ParserFn::Plain(parsers::object_list)],
    offense: OffenseSpec {
        kind: OffenseKind::Line,
        name: "UndocumentedObject",
        message: undocumented_object_message,
    },
};

/// Reports methods whose parameters outnumber their `@param` tags.
pub const UNDOCUMENTED_METHOD_ARGUMENTS: ValidatorDescriptor = ValidatorDescriptor {
    name: "Documentation/UndocumentedMethodArguments",
    ident: "undocumented_method_arguments",
    department: "Documentation",
    kind: ValidatorKind::Standard,
    enabled_by_default: true,
    default_severity: Some(Severity::Warning),
    extra_defaults: &[],
    command: undocumented_method_arguments_command,
    parsers: &[ParserFn::Plain(parsers::method_list)],
    offense: OffenseSpec {
        kind: OffenseKind::Method,
        name: "UndocumentedMethodArgument",
        message: undocumented_method_argument_message,
    },
};

/// Reports `?` methods missing documentation. Never surfaces on its own:
/// its findings are reported under `Documentation/UndocumentedObjects`.
pub const UNDOCUMENTED_BOOLEAN_METHODS: ValidatorDescriptor = ValidatorDescriptor {
    name: "Documentation/UndocumentedBooleanMethods",
    ident: "undocumented_boolean_methods",
    department: "Documentation",
    kind: ValidatorKind::Standard,
    enabled_by_default: true,
    default_severity: Some(Severity::Warning),
    extra_defaults: &[],
    command: undocumented_boolean_methods_command,
    parsers: &[ParserFn::Plain(parsers::object_list)],
    offense: OffenseSpec {
        kind: OffenseKind::Line,
        name: "UndocumentedObject",
        message: undocumented_object_message,
    },
};

fn undocumented_objects_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    yard_list_command(config, files, "docstring.blank?")
}

fn undocumented_method_arguments_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    yard_list_command(
        config,
        files,
        r#"type == :method && !docstring.blank? && tags(:param).size < parameters.size"#,
    )
}

fn undocumented_boolean_methods_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    yard_list_command(
        config,
        files,
        r#"type == :method && name.to_s.end_with?("?") && tags(:return).empty?"#,
    )
}

fn undocumented_object_message(candidate: &OffenseCandidate) -> String {
    let element = candidate
        .element
        .as_deref()
        .unwrap_or(candidate.location.as_str());
    format!("Documentation required for `{element}`")
}

fn undocumented_method_argument_message(candidate: &OffenseCandidate) -> String {
    let method = candidate.method_name.as_deref().unwrap_or("?");
    format!("The `{method}` method is missing documentation for some of the arguments.")
}
