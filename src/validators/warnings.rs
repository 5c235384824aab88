//! Warnings department: parser warnings surfaced by the tool itself.
//!
//! All six validators read the same stats invocation; the command cache
//! turns that into one external execution per run. Each validator gates
//! on its own warning family and ignores every other line.

use std::path::PathBuf;

use regex::Regex;
use std::sync::LazyLock;

use crate::config::EffectiveConfig;
use crate::parsers::{one_line, OffenseCandidate, ParserFn};
use crate::registry::{OffenseSpec, ValidatorDescriptor, ValidatorKind};
use crate::results::offense::{OffenseKind, Severity};

use super::yard_stats_command;

macro_rules! warning_validator {
    ($const_name:ident, $name:literal, $ident:literal, $offense:literal, $parser:ident) => {
        pub const $const_name: ValidatorDescriptor = ValidatorDescriptor {
            name: $name,
            ident: $ident,
            department: "Warnings",
            kind: ValidatorKind::Standard,
            enabled_by_default: true,
            default_severity: Some(Severity::Error),
            extra_defaults: &[],
            command: stats_command,
            parsers: &[ParserFn::Plain($parser)],
            offense: OffenseSpec {
                kind: OffenseKind::Line,
                name: $offense,
                message: warning_message,
            },
        };
    };
}

warning_validator!(
    UNKNOWN_TAG,
    "Warnings/UnknownTag",
    "unknown_tag",
    "UnknownTag",
    unknown_tag_parser
);
warning_validator!(
    UNKNOWN_DIRECTIVE,
    "Warnings/UnknownDirective",
    "unknown_directive",
    "UnknownDirective",
    unknown_directive_parser
);
warning_validator!(
    INVALID_TAG_FORMAT,
    "Warnings/InvalidTagFormat",
    "invalid_tag_format",
    "InvalidTagFormat",
    invalid_tag_format_parser
);
warning_validator!(
    INVALID_DIRECTIVE_FORMAT,
    "Warnings/InvalidDirectiveFormat",
    "invalid_directive_format",
    "InvalidDirectiveFormat",
    invalid_directive_format_parser
);
warning_validator!(
    DUPLICATED_PARAMETER_NAME,
    "Warnings/DuplicatedParameterName",
    "duplicated_parameter_name",
    "DuplicatedParameterName",
    duplicated_parameter_name_parser
);
warning_validator!(
    UNKNOWN_PARAMETER_NAME,
    "Warnings/UnknownParameterName",
    "unknown_parameter_name",
    "UnknownParameterName",
    unknown_parameter_name_parser
);

fn stats_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    yard_stats_command(config, files)
}

fn warning_message(candidate: &OffenseCandidate) -> String {
    candidate.message.clone().unwrap_or_default()
}

static UNKNOWN_TAG_GATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[warn\]: Unknown tag @").unwrap());
static UNKNOWN_DIRECTIVE_GATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[warn\]: Unknown directive @!").unwrap());
static INVALID_TAG_FORMAT_GATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[warn\]: Invalid tag format for @").unwrap());
static INVALID_DIRECTIVE_FORMAT_GATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[warn\]: Invalid directive format for @!").unwrap());
static DUPLICATED_PARAMETER_NAME_GATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[warn\]: @param tag has duplicate parameter name").unwrap());
static UNKNOWN_PARAMETER_NAME_GATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[warn\]: @param tag has unknown parameter name").unwrap());

fn unknown_tag_parser(text: &str) -> Vec<OffenseCandidate> {
    one_line::parse(text, &UNKNOWN_TAG_GATE, "UnknownTag")
}

fn unknown_directive_parser(text: &str) -> Vec<OffenseCandidate> {
    one_line::parse(text, &UNKNOWN_DIRECTIVE_GATE, "UnknownDirective")
}

fn invalid_tag_format_parser(text: &str) -> Vec<OffenseCandidate> {
    one_line::parse(text, &INVALID_TAG_FORMAT_GATE, "InvalidTagFormat")
}

fn invalid_directive_format_parser(text: &str) -> Vec<OffenseCandidate> {
    one_line::parse(
        text,
        &INVALID_DIRECTIVE_FORMAT_GATE,
        "InvalidDirectiveFormat",
    )
}

fn duplicated_parameter_name_parser(text: &str) -> Vec<OffenseCandidate> {
    one_line::parse(
        text,
        &DUPLICATED_PARAMETER_NAME_GATE,
        "DuplicatedParameterName",
    )
}

fn unknown_parameter_name_parser(text: &str) -> Vec<OffenseCandidate> {
    one_line::parse(text, &UNKNOWN_PARAMETER_NAME_GATE, "UnknownParameterName")
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS_OUTPUT: &str = "\
Files:           2
[warn]: Unknown tag @wat in file `lib/a.rb` near line 4
[warn]: @param tag has duplicate parameter name: x in file `lib/b.rb` near line 9
[warn]: @param tag has unknown parameter name: ghost in file `lib/b.rb` near line 14
";

    #[test]
    fn each_parser_only_claims_its_own_lines() {
        assert_eq!(unknown_tag_parser(STATS_OUTPUT).len(), 1);
        assert_eq!(duplicated_parameter_name_parser(STATS_OUTPUT).len(), 1);
        assert_eq!(unknown_parameter_name_parser(STATS_OUTPUT).len(), 1);
        assert!(unknown_directive_parser(STATS_OUTPUT).is_empty());
        assert!(invalid_tag_format_parser(STATS_OUTPUT).is_empty());
    }

    #[test]
    fn parsed_candidates_carry_name_message_location_line() {
        let candidates = unknown_tag_parser(STATS_OUTPUT);
        let c = &candidates[0];

        assert_eq!(c.name.as_deref(), Some("UnknownTag"));
        assert_eq!(c.message.as_deref(), Some("Unknown tag @wat"));
        assert_eq!(c.location, "lib/a.rb");
        assert_eq!(c.line, 4);
    }

    #[test]
    fn all_six_share_the_same_command() {
        let config = EffectiveConfig::empty();
        let files = vec![PathBuf::from("/a.rb")];

        let commands: Vec<String> = [
            UNKNOWN_TAG,
            UNKNOWN_DIRECTIVE,
            INVALID_TAG_FORMAT,
            INVALID_DIRECTIVE_FORMAT,
            DUPLICATED_PARAMETER_NAME,
            UNKNOWN_PARAMETER_NAME,
        ]
        .iter()
        .map(|d| (d.command)(&config, &files))
        .collect();

        assert!(commands.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn warning_message_is_the_parsed_text() {
        let candidate = OffenseCandidate {
            message: Some("Unknown tag @wat".into()),
            ..Default::default()
        };
        assert_eq!(warning_message(&candidate), "Unknown tag @wat");
    }
}
