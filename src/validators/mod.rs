//! Validator families, grouped by department.
//!
//! Each department module declares its validators as static
//! [`ValidatorDescriptor`](crate::registry::ValidatorDescriptor) constants:
//! the command sent to the external tool, the parsers for its output, and
//! the offense shape. The registry stitches the departments together in
//! execution order.

pub mod documentation;
pub mod semantic;
pub mod tags;
pub mod warnings;

use std::path::PathBuf;

use crate::config::EffectiveConfig;
use crate::shell::quote;

/// Scratch documentation database the tool writes while listing objects.
/// Keeping it out of the project tree keeps runs side-effect free.
fn db_dir() -> PathBuf {
    std::env::temp_dir().join("doclint-yardoc")
}

fn escaped_files(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|f| quote(&f.display().to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a `yard list` invocation with a query over the selection.
pub(crate) fn yard_list_command(
    config: &EffectiveConfig,
    files: &[PathBuf],
    query: &str,
) -> String {
    let options = config.yard_options().join(" ");
    format!(
        "yard list {} --query {} -q -b {} {}",
        options,
        quote(query),
        quote(&db_dir().display().to_string()),
        escaped_files(files)
    )
}

/// Build the `yard stats` invocation shared by the whole warnings
/// department. Identical text across validators lets the command cache
/// collapse six executions into one.
pub(crate) fn yard_stats_command(config: &EffectiveConfig, files: &[PathBuf]) -> String {
    let options = config.yard_options().join(" ");
    format!(
        "yard stats --list-undoc {} -b {} {}",
        options,
        quote(&db_dir().display().to_string()),
        escaped_files(files)
    )
}

/// Interpolate configured word lists into a ruby `%w[...]` literal.
pub(crate) fn word_list(config: &EffectiveConfig, validator: &str, key: &str) -> String {
    config
        .option_strings(validator, key)
        .unwrap_or_default()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<PathBuf> {
        vec![PathBuf::from("/proj/a.rb"), PathBuf::from("/proj/b c.rb")]
    }

    #[test]
    fn list_command_quotes_query_and_files() {
        let config = EffectiveConfig::empty();
        let cmd = yard_list_command(&config, &files(), "docstring.blank?");

        assert!(cmd.starts_with("yard list "));
        assert!(cmd.contains("--query 'docstring.blank?'"));
        assert!(cmd.contains("/proj/a.rb"));
        assert!(cmd.contains("'/proj/b c.rb'"));
    }

    #[test]
    fn list_command_passes_through_yard_options() {
        let mut config = EffectiveConfig::empty();
        config.set_yard_options(vec!["--private".to_string()]);

        let cmd = yard_list_command(&config, &files(), "q");
        assert!(cmd.contains("--private"));
    }

    #[test]
    fn stats_command_is_stable_for_equal_inputs() {
        let config = EffectiveConfig::empty();
        assert_eq!(
            yard_stats_command(&config, &files()),
            yard_stats_command(&config, &files())
        );
    }

    #[test]
    fn word_list_joins_configured_values() {
        let config = EffectiveConfig::empty();
        let words = word_list(&config, "Tags/ApiTags", "AllowedApis");
        assert_eq!(words, "public private internal");
    }
}
