//! Tags department: tag quality and consistency checks.
//!
//! These validators ask the tool to print pipe-separated rows from inside
//! the query (`puts ... ; false` keeps the regular listing empty), so the
//! structured payload survives the text boundary.

use std::path::PathBuf;

use crate::config::EffectiveConfig;
use crate::parsers::{pipe, OffenseCandidate, ParserFn};
use crate::registry::{OffenseSpec, ValidatorDescriptor, ValidatorKind};
use crate::results::offense::{OffenseKind, Severity};

use super::{word_list, yard_list_command};

/// Flags tags whose type definitions do not look like types.
pub const INVALID_TYPES: ValidatorDescriptor = ValidatorDescriptor {
    name: "Tags/InvalidTypes",
    ident: "invalid_types",
    department: "Tags",
    kind: ValidatorKind::Standard,
    enabled_by_default: true,
    default_severity: Some(Severity::Warning),
    extra_defaults: &[
        ("ValidatedTags", &["param", "option", "return", "yieldreturn"]),
        ("ExtraTypes", &[]),
    ],
    command: invalid_types_command,
    parsers: &[ParserFn::Plain(invalid_types_parser)],
    offense: OffenseSpec {
        kind: OffenseKind::Method,
        name: "InvalidTagType",
        message: invalid_types_message,
    },
};

/// Enforces a canonical tag order on documented methods.
pub const ORDER: ValidatorDescriptor = ValidatorDescriptor {
    name: "Tags/Order",
    ident: "order",
    department: "Tags",
    kind: ValidatorKind::Standard,
    enabled_by_default: true,
    default_severity: Some(Severity::Convention),
    extra_defaults: &[(
        "EnforcedOrder",
        &[
            "param",
            "option",
            "yield",
            "yieldparam",
            "yieldreturn",
            "return",
            "raise",
            "see",
            "example",
            "note",
            "todo",
        ],
    )],
    command: order_command,
    parsers: &[ParserFn::WithConfig(order_parser)],
    offense: OffenseSpec {
        kind: OffenseKind::Method,
        name: "InvalidTagsOrder",
        message: order_message,
    },
};

/// Requires `@api` tags on public objects. Opt-in.
pub const API_TAGS: ValidatorDescriptor = ValidatorDescriptor {
    name: "Tags/ApiTags",
    ident: "api_tags",
    department: "Tags",
    kind: ValidatorKind::Standard,
    enabled_by_default: false,
    default_severity: Some(Severity::Warning),
    extra_defaults: &[("AllowedApis", &["public", "private", "internal"])],
    command: api_tags_command,
    parsers: &[ParserFn::Plain(api_tags_parser)],
    offense: OffenseSpec {
        kind: OffenseKind::Line,
        name: "ApiTagViolation",
        message: api_tags_message,
    },
};

/// Requires `@option` tags on methods taking an options parameter.
pub const OPTION_TAGS: ValidatorDescriptor = ValidatorDescriptor {
    name: "Tags/OptionTags",
    ident: "option_tags",
    department: "Tags",
    kind: ValidatorKind::Standard,
    enabled_by_default: true,
    default_severity: Some(Severity::Warning),
    extra_defaults: &[("ParameterNames", &["options", "opts", "kwargs"])],
    command: option_tags_command,
    parsers: &[ParserFn::Plain(option_tags_parser)],
    offense: OffenseSpec {
        kind: OffenseKind::Method,
        name: "OptionTagMissing",
        message: option_tags_message,
    },
};

fn invalid_types_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    let validated = word_list(config, "Tags/InvalidTypes", "ValidatedTags");
    let extra = word_list(config, "Tags/InvalidTypes", "ExtraTypes");
    let query = format!(
        r##"begin; checked = %w[{validated}]; extra = %w[{extra}]; bad = tags.select {{ |t| checked.include?(t.tag_name) }}.any? {{ |t| t.types.to_a.any? {{ |ty| !ty.match?(/\A[A-Z#]/) && !extra.include?(ty) }} }}; puts "#{{file}}|#{{line}}|#{{name}}" if bad; end; false"##
    );
    yard_list_command(config, files, &query)
}

fn order_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    let enforced = word_list(config, "Tags/Order", "EnforcedOrder");
    let query = format!(
        r##"begin; expected = %w[{enforced}]; actual = tags.map(&:tag_name).select {{ |t| expected.include?(t) }}; sorted = actual.sort_by {{ |t| expected.index(t) }}; puts "#{{file}}|#{{line}}|#{{name}}|#{{expected.join(",")}}" if actual != sorted; end; false"##
    );
    yard_list_command(config, files, &query)
}

fn api_tags_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    let allowed = word_list(config, "Tags/ApiTags", "AllowedApis");
    let query = format!(
        r##"begin; allowed = %w[{allowed}]; if tag(:api).nil? && visibility == :public; puts "#{{file}}|#{{line}}|#{{path}}|missing"; elsif tag(:api) && !allowed.include?(tag(:api).text); puts "#{{file}}|#{{line}}|#{{path}}|invalid:#{{tag(:api).text}}"; end; end; false"##
    );
    yard_list_command(config, files, &query)
}

fn option_tags_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    let names = word_list(config, "Tags/OptionTags", "ParameterNames");
    let query = format!(
        r##"begin; opt_names = %w[{names}]; takes_options = type == :method && parameters.any? {{ |(n, _)| opt_names.include?(n.to_s.delete(":*")) }}; puts "#{{file}}|#{{line}}|#{{name}}" if takes_options && tags(:option).empty?; end; false"##
    );
    yard_list_command(config, files, &query)
}

fn invalid_types_parser(text: &str) -> Vec<OffenseCandidate> {
    pipe::method_rows(text, 3, |_, _| {})
}

/// Rows carry the expected order as a fourth field; older query output
/// without it falls back to the configured order.
fn order_parser(text: &str, config: &EffectiveConfig) -> Vec<OffenseCandidate> {
    let configured = config
        .option_strings("Tags/Order", "EnforcedOrder")
        .unwrap_or_default()
        .join(",");
    pipe::method_rows(text, 3, |candidate, parts| {
        candidate.detail = Some(match parts.get(3) {
            Some(order) if !order.is_empty() => order.to_string(),
            _ => configured.clone(),
        });
    })
}

fn api_tags_parser(text: &str) -> Vec<OffenseCandidate> {
    pipe::method_rows(text, 4, |candidate, parts| {
        candidate.element = candidate.method_name.take();
        candidate.detail = Some(parts[3].to_string());
        candidate.name = Some(if parts[3] == "missing" {
            "MissingApiTag".to_string()
        } else {
            "InvalidApiTag".to_string()
        });
    })
}

fn option_tags_parser(text: &str) -> Vec<OffenseCandidate> {
    pipe::method_rows(text, 3, |_, _| {})
}

fn invalid_types_message(candidate: &OffenseCandidate) -> String {
    let method = candidate.method_name.as_deref().unwrap_or("?");
    format!("The `{method}` has at least one tag with an invalid type definition.")
}

fn order_message(candidate: &OffenseCandidate) -> String {
    let method = candidate.method_name.as_deref().unwrap_or("?");
    let expected = candidate
        .detail
        .as_deref()
        .unwrap_or("")
        .split(',')
        .filter(|t| !t.is_empty())
        .map(|t| format!("`{t}`"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "The `{method}` has yard tags in an invalid order. \
         Following tags need to be in the presented order: {expected}."
    )
}

fn api_tags_message(candidate: &OffenseCandidate) -> String {
    let object = candidate.element.as_deref().unwrap_or("?");
    match candidate.detail.as_deref() {
        Some("missing") | None => format!("Public object `{object}` is missing @api tag"),
        Some(status) => {
            let value = status.strip_prefix("invalid:").unwrap_or(status);
            format!("Object `{object}` has invalid @api tag value: '{value}'")
        }
    }
}

fn option_tags_message(candidate: &OffenseCandidate) -> String {
    let method = candidate.method_name.as_deref().unwrap_or("?");
    format!(
        "Method `{method}` has options parameter but no @option tags \
         documenting the available options"
    )
}
