//! Builds per-validator offense collections from raw command output.
//!
//! Composite validators gather their own output plus every child's, run
//! each side's own parser set, and surface exactly one collection tagged
//! under the parent identity; the children never appear at top level.
//! `None` (not an empty collection) means "nothing to report".

use std::collections::HashMap;

use crate::config::EffectiveConfig;
use crate::parsers::OffenseCandidate;
use crate::registry::{self, ValidatorDescriptor, ValidatorKind};
use crate::results::formatter::format_offenses;
use crate::results::offense::Offense;
use crate::shell::CommandOutcome;

/// Raw command outcomes keyed by validator identifier.
pub type RawOutputs = HashMap<&'static str, CommandOutcome>;

/// One validator's formatted offenses.
#[derive(Debug, Clone)]
pub struct ValidatorOffenses {
    /// Full validator name the collection is tagged under.
    pub validator: &'static str,
    pub offenses: Vec<Offense>,
}

/// Turns raw outputs into offense collections using the static registry.
pub struct ResultBuilder<'a> {
    config: &'a EffectiveConfig,
}

impl<'a> ResultBuilder<'a> {
    pub fn new(config: &'a EffectiveConfig) -> Self {
        Self { config }
    }

    /// Build the collection for one validator, or `None` when it has
    /// nothing to report (or is folded into a composite parent).
    pub fn build(&self, name: &str, raw: &RawOutputs) -> Option<ValidatorOffenses> {
        let descriptor = registry::find(name)?;

        if registry::is_composite_child(name) {
            return None;
        }

        let candidates = match descriptor.kind {
            ValidatorKind::Standard => self.parse_output(descriptor, raw),
            ValidatorKind::Composite { children } => {
                let mut combined = self.parse_output(descriptor, raw);
                for child in children {
                    if let Some(child_descriptor) = registry::find(child) {
                        combined.extend(self.parse_output(child_descriptor, raw));
                    }
                }
                combined
            }
        };

        if candidates.is_empty() {
            return None;
        }

        Some(ValidatorOffenses {
            validator: descriptor.name,
            offenses: format_offenses(descriptor, &candidates, self.config),
        })
    }

    /// Run a validator's own parser set over its own stdout.
    fn parse_output(
        &self,
        descriptor: &ValidatorDescriptor,
        raw: &RawOutputs,
    ) -> Vec<OffenseCandidate> {
        let Some(outcome) = raw.get(descriptor.ident) else {
            return Vec::new();
        };
        if outcome.stdout.is_empty() {
            return Vec::new();
        }

        descriptor
            .parsers
            .iter()
            .flat_map(|parser| parser.call(&outcome.stdout, self.config))
            .collect()
    }
}
