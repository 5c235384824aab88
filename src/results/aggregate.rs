//! Final aggregation: merged offense list, statistics, exit policy.

use crate::config::EffectiveConfig;
use crate::results::builder::ValidatorOffenses;
use crate::results::offense::{Offense, Severity};

/// Offense counts by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct Statistics {
    pub error: usize,
    pub warning: usize,
    pub convention: usize,
    pub total: usize,
}

/// The merged result of one full run.
///
/// Collections stay in registry (department) order; within one validator,
/// parser emission order is preserved. Fresh and immutable per run.
#[derive(Debug, Clone)]
pub struct AggregateResult {
    collections: Vec<ValidatorOffenses>,
    config: EffectiveConfig,
}

impl AggregateResult {
    pub fn new(collections: Vec<ValidatorOffenses>, config: EffectiveConfig) -> Self {
        Self {
            collections,
            config,
        }
    }

    /// Per-validator collections in report order.
    pub fn collections(&self) -> &[ValidatorOffenses] {
        &self.collections
    }

    /// The configuration this result was produced under.
    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    /// All offenses, flattened in report order.
    pub fn offenses(&self) -> impl Iterator<Item = &Offense> {
        self.collections.iter().flat_map(|c| c.offenses.iter())
    }

    /// Total offense count.
    pub fn count(&self) -> usize {
        self.collections.iter().map(|c| c.offenses.len()).sum()
    }

    /// Whether the run found nothing at all.
    pub fn clean(&self) -> bool {
        self.count() == 0
    }

    /// Counts by severity.
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics::default();
        for offense in self.offenses() {
            match offense.severity {
                Severity::Error => stats.error += 1,
                Severity::Warning => stats.warning += 1,
                Severity::Convention => stats.convention += 1,
                Severity::Never => {}
            }
            stats.total += 1;
        }
        stats
    }

    /// Exit code under the configured fail policy.
    ///
    /// `never` always passes; `error` fails only on errors; `warning`
    /// fails on errors or warnings; `convention` fails on anything. An
    /// unrecognized configured value fails closed.
    pub fn exit_code(&self) -> i32 {
        if self.clean() {
            return 0;
        }

        match self.config.fail_on_severity() {
            Some(Severity::Never) => 0,
            Some(Severity::Error) => self.fails_at(Severity::Error),
            Some(Severity::Warning) => self.fails_at(Severity::Warning),
            Some(Severity::Convention) => 1,
            None => 1,
        }
    }

    fn fails_at(&self, threshold: Severity) -> i32 {
        if self.offenses().any(|o| o.severity >= threshold) {
            1
        } else {
            0
        }
    }
}
