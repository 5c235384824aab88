//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// doclint - YARD documentation linting.
#[derive(Debug, Parser)]
#[command(name = "doclint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files, directories, or glob patterns to lint (default: current
    /// directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Path to config file (overrides discovery of .doclint.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum severity that fails the run
    /// (error | warning | convention | never)
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// List all registered validators and exit
    #[arg(long)]
    pub list_validators: bool,

    /// Log each validator as it runs
    #[arg(long)]
    pub progress: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paths_and_flags() {
        let cli = Cli::parse_from(["doclint", "lib", "app", "--progress", "--no-color"]);

        assert_eq!(cli.paths, vec!["lib", "app"]);
        assert!(cli.progress);
        assert!(cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn format_defaults_to_human() {
        let cli = Cli::parse_from(["doclint"]);
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn json_format_is_selectable() {
        let cli = Cli::parse_from(["doclint", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn fail_on_is_passed_through_raw() {
        let cli = Cli::parse_from(["doclint", "--fail-on", "error"]);
        assert_eq!(cli.fail_on.as_deref(), Some("error"));
    }
}
