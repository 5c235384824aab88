//! Semantic department: implementation-vs-documentation consistency.

use std::path::PathBuf;

use crate::config::EffectiveConfig;
use crate::parsers::{pipe, OffenseCandidate, ParserFn};
use crate::registry::{OffenseSpec, ValidatorDescriptor, ValidatorKind};
use crate::results::offense::{OffenseKind, Severity};

use super::yard_list_command;

/// Flags `@abstract` methods that carry a real implementation.
pub const ABSTRACT_METHODS: ValidatorDescriptor = ValidatorDescriptor {
    name: "Semantic/AbstractMethods",
    ident: "abstract_methods",
    department: "Semantic",
    kind: ValidatorKind::Standard,
    enabled_by_default: true,
    default_severity: Some(Severity::Warning),
    extra_defaults: &[(
        "AllowedImplementations",
        &["raise NotImplementedError", r#"raise NotImplementedError, ".+""#],
    )],
    command: abstract_methods_command,
    parsers: &[ParserFn::Plain(abstract_methods_parser)],
    offense: OffenseSpec {
        kind: OffenseKind::Method,
        name: "AbstractMethodWithImplementation",
        message: abstract_methods_message,
    },
};

fn abstract_methods_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    let allowed = config
        .option_strings("Semantic/AbstractMethods", "AllowedImplementations")
        .unwrap_or_default()
        .into_iter()
        .map(|p| format!("/{p}/"))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!(
        r##"begin; if type == :method && tag(:abstract); body = source.to_s.lines.drop(1).tap(&:pop).join.strip; allowed = [{allowed}]; puts "#{{file}}|#{{line}}|#{{name}}" unless body.empty? || allowed.any? {{ |p| body.match?(p) }}; end; end; false"##
    );
    yard_list_command(config, files, &query)
}

fn abstract_methods_parser(text: &str) -> Vec<OffenseCandidate> {
    pipe::method_rows(text, 3, |_, _| {})
}

fn abstract_methods_message(candidate: &OffenseCandidate) -> String {
    let method = candidate.method_name.as_deref().unwrap_or("?");
    format!(
        "Abstract method `{method}` has implementation \
         (should only raise NotImplementedError or be empty)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_reads_pipe_rows() {
        let candidates = abstract_methods_parser("/a.rb|21|perform\n");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].line, 21);
        assert_eq!(candidates[0].method_name.as_deref(), Some("perform"));
    }

    #[test]
    fn message_names_the_method() {
        let candidate = OffenseCandidate {
            method_name: Some("perform".into()),
            ..Default::default()
        };
        assert_eq!(
            abstract_methods_message(&candidate),
            "Abstract method `perform` has implementation \
             (should only raise NotImplementedError or be empty)"
        );
    }

    #[test]
    fn command_embeds_allowed_implementations() {
        let config = EffectiveConfig::empty();
        let cmd = abstract_methods_command(&config, &[PathBuf::from("/a.rb")]);
        assert!(cmd.contains("NotImplementedError"));
    }
}
