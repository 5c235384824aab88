//! Validator orchestration.
//!
//! Runs every enabled validator in registry order, narrowing the file
//! selection by each validator's own exclude patterns, issuing commands
//! through the command cache, and handing raw output to the result
//! builder. One validator's external failure never aborts the rest:
//! missing or unusable stdout simply contributes zero candidates.

use std::path::PathBuf;

use crate::cache::{CacheStats, CommandCache};
use crate::config::EffectiveConfig;
use crate::registry;
use crate::results::{AggregateResult, RawOutputs, ResultBuilder};
use crate::selection;

/// Orchestrates one full pass over a file selection.
pub struct Runner {
    selection: Vec<PathBuf>,
    config: EffectiveConfig,
    cache: CommandCache,
    progress: bool,
}

impl Runner {
    /// Create a runner over an already-expanded selection.
    pub fn new(selection: Vec<PathBuf>, config: EffectiveConfig) -> Self {
        Self {
            selection,
            config,
            cache: CommandCache::new(),
            progress: false,
        }
    }

    /// Log each validator at info level as it runs.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Execution statistics of the underlying command cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Run all enabled validators and aggregate their offenses.
    pub fn run(&mut self) -> AggregateResult {
        let raw = self.run_validators();

        let builder = ResultBuilder::new(&self.config);
        let collections = registry::all()
            .iter()
            .filter(|descriptor| self.config.validator_enabled(descriptor.name))
            .filter_map(|descriptor| builder.build(descriptor.name, &raw))
            .collect();

        AggregateResult::new(collections, self.config.clone())
    }

    /// Issue every enabled validator's command, keyed by identifier.
    fn run_validators(&mut self) -> RawOutputs {
        let mut raw = RawOutputs::new();

        for descriptor in registry::all() {
            if !self.config.validator_enabled(descriptor.name) {
                tracing::debug!(validator = descriptor.name, "disabled, skipping");
                continue;
            }

            let files = self.files_for(descriptor.name);
            if files.is_empty() {
                tracing::debug!(validator = descriptor.name, "no files left, skipping");
                continue;
            }

            if self.progress {
                tracing::info!(validator = descriptor.name, "running");
            }

            let command = (descriptor.command)(&self.config, &files);
            match self.cache.execute(&command) {
                Ok(outcome) => {
                    if !outcome.success() {
                        tracing::debug!(
                            validator = descriptor.name,
                            exit_code = ?outcome.exit_code,
                            stderr = %outcome.stderr,
                            "external command exited non-zero"
                        );
                    }
                    raw.insert(descriptor.ident, outcome);
                }
                Err(e) => {
                    tracing::warn!(validator = descriptor.name, error = %e, "execution failed");
                }
            }
        }

        raw
    }

    /// The selection minus this validator's own exclude patterns. The
    /// global exclude was already applied during selection; this can only
    /// narrow further, never widen.
    fn files_for(&self, validator: &str) -> Vec<PathBuf> {
        let patterns = self.config.exclude(validator);
        if patterns.is_empty() {
            return self.selection.clone();
        }

        let excludes = selection::build_globset(patterns);
        self.selection
            .iter()
            .filter(|file| !selection::is_excluded(file, &excludes))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yaml: &str) -> EffectiveConfig {
        EffectiveConfig::new(serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn empty_selection_runs_nothing_and_is_clean() {
        let mut runner = Runner::new(Vec::new(), EffectiveConfig::empty());

        let result = runner.run();

        assert!(result.clean());
        assert_eq!(runner.cache_stats().total(), 0);
    }

    #[test]
    fn per_validator_exclude_narrows_the_selection() {
        let config = config(
            r#"
Documentation/UndocumentedObjects:
  Exclude:
    - "**/skipped/**/*"
"#,
        );
        let runner = Runner::new(
            vec![
                PathBuf::from("/proj/lib/kept.rb"),
                PathBuf::from("/proj/lib/skipped/gone.rb"),
            ],
            config,
        );

        let files = runner.files_for("Documentation/UndocumentedObjects");
        assert_eq!(files, vec![PathBuf::from("/proj/lib/kept.rb")]);

        // Another validator still sees the full selection.
        let files = runner.files_for("Documentation/UndocumentedMethodArguments");
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn disabled_validators_are_not_executed() {
        let config = config(
            r#"
AllValidators:
  Exclude: []
Documentation:
  Enabled: false
Tags:
  Enabled: false
Warnings:
  Enabled: false
Semantic:
  Enabled: false
"#,
        );
        let mut runner = Runner::new(vec![PathBuf::from("/proj/a.rb")], config);

        let result = runner.run();

        assert!(result.clean());
        assert_eq!(runner.cache_stats().total(), 0);
    }
}
