//! doclint - configurable YARD documentation linting.
//!
//! doclint orchestrates independent documentation-quality validators
//! against a Ruby source tree. Each validator shells out to the `yard`
//! documentation tool, parses its textual output into structured
//! candidates, and everything merges into one severity-ranked offense
//! report with a configurable exit-code policy.
//!
//! # Modules
//!
//! - [`cache`] - Command result caching keyed by normalized command text
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, inheritance, and projection
//! - [`error`] - Error types and result aliases
//! - [`output`] - Human and JSON report formatters
//! - [`parsers`] - Pure converters from tool output to candidate records
//! - [`registry`] - Static validator catalog
//! - [`results`] - Offense formatting, composite folding, aggregation
//! - [`runner`] - Validator execution orchestration
//! - [`selection`] - Path expansion and exclusion matching
//! - [`shell`] - Shell command execution
//! - [`validators`] - Validator families, grouped by department
//!
//! # Example
//!
//! ```no_run
//! use doclint::{run, RunOptions};
//!
//! let result = run(&["lib".to_string()], RunOptions::default()).unwrap();
//! std::process::exit(result.exit_code());
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parsers;
pub mod registry;
pub mod results;
pub mod runner;
pub mod selection;
pub mod shell;
pub mod validators;

pub use error::{DoclintError, Result};

use std::path::PathBuf;

use config::{ConfigLoader, EffectiveConfig};
use results::AggregateResult;
use runner::Runner;

/// Options for one lint run.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Pre-built configuration; skips discovery entirely.
    pub config: Option<EffectiveConfig>,
    /// Explicit config file path; missing or malformed is fatal.
    pub config_file: Option<PathBuf>,
    /// Log each validator as it runs.
    pub progress: bool,
}

/// Run the full pipeline over the given paths.
///
/// Config resolution order: a pre-built config wins, then an explicit
/// config file, then the nearest discovered `.doclint.yml`, then
/// defaults.
pub fn run(paths: &[String], options: RunOptions) -> Result<AggregateResult> {
    let config = match options.config {
        Some(config) => config,
        None => match &options.config_file {
            Some(path) => ConfigLoader::from_file(path)?,
            None => {
                let cwd = std::env::current_dir()?;
                ConfigLoader::discover(&cwd)?.unwrap_or_else(EffectiveConfig::empty)
            }
        },
    };

    let files = selection::expand(paths, &config);
    tracing::debug!(files = files.len(), "selection expanded");

    let mut runner = Runner::new(files, config).with_progress(options.progress);
    Ok(runner.run())
}
