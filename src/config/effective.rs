//! Fully resolved, layered configuration for one run.
//!
//! [`EffectiveConfig`] projects a merged raw document onto the validator
//! registry: every registered validator gets a settings entry built as
//! `built-in default ← department block ← validator block`, with metadata
//! keys excluded from override application. The projection is computed
//! once up front; setters mutate the raw document and rebuild the whole
//! projection from scratch.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::config::merger::deep_merge;
use crate::registry::{self, ValidatorDescriptor};
use crate::results::offense::Severity;

/// Keys that document a validator but never configure it.
const METADATA_KEYS: &[&str] = &["Description", "StyleGuide", "VersionAdded", "VersionChanged"];

/// Global exclusion patterns applied when the config does not say
/// otherwise.
pub const DEFAULT_EXCLUDE: &[&str] = &[".git/**/*", "vendor/**/*", "node_modules/**/*"];

/// Severity threshold used when `FailOnSeverity` is absent.
pub const DEFAULT_FAIL_ON_SEVERITY: Severity = Severity::Warning;

/// Resolved settings for one validator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorSettings {
    pub enabled: bool,
    pub severity: Severity,
    pub exclude: Vec<String>,
    /// The full merged block, validator-specific keys included.
    pub options: Mapping,
}

/// The effective configuration used for one run.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    raw: Mapping,
    validators: BTreeMap<&'static str, ValidatorSettings>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self::empty()
    }
}

impl EffectiveConfig {
    /// Build from a merged raw document.
    pub fn new(raw: Value) -> Self {
        let raw = match raw {
            Value::Mapping(m) => m,
            _ => Mapping::new(),
        };
        let validators = Self::build_validators(&raw);
        Self { raw, validators }
    }

    /// All-default configuration (no document found).
    pub fn empty() -> Self {
        Self::new(Value::Mapping(Mapping::new()))
    }

    /// Whether a validator is enabled. Unregistered names are never
    /// enabled.
    pub fn validator_enabled(&self, name: &str) -> bool {
        self.validators.get(name).map(|s| s.enabled).unwrap_or(false)
    }

    /// Resolved severity for a validator: configured value, else the
    /// validator default, else the department default.
    pub fn severity(&self, name: &str) -> Severity {
        match self.validators.get(name) {
            Some(settings) => settings.severity,
            None => registry::department_severity(name.split('/').next().unwrap_or("")),
        }
    }

    /// Per-validator exclusion patterns.
    pub fn exclude(&self, name: &str) -> &[String] {
        self.validators
            .get(name)
            .map(|s| s.exclude.as_slice())
            .unwrap_or(&[])
    }

    /// A validator-specific option value.
    pub fn option<'a>(&'a self, name: &str, key: &str) -> Option<&'a Value> {
        get(&self.validators.get(name)?.options, key)
    }

    /// A validator-specific option as a list of strings.
    pub fn option_strings(&self, name: &str, key: &str) -> Option<Vec<String>> {
        let seq = self.option(name, key)?.as_sequence()?;
        Some(
            seq.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        )
    }

    /// Global file exclusion patterns (the selection floor).
    pub fn global_exclude(&self) -> Vec<String> {
        match self.global_block().and_then(|b| get(b, "Exclude")) {
            Some(Value::Sequence(seq)) => seq
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Minimum severity that fails the run.
    ///
    /// `None` means the document carried an unrecognized value; callers
    /// must fail closed.
    pub fn fail_on_severity(&self) -> Option<Severity> {
        match self.global_block().and_then(|b| get(b, "FailOnSeverity")) {
            Some(Value::String(s)) => s.parse().ok(),
            Some(_) => None,
            None => Some(DEFAULT_FAIL_ON_SEVERITY),
        }
    }

    /// Pass-through invocation options for the external tool.
    pub fn yard_options(&self) -> Vec<String> {
        match self.global_block().and_then(|b| get(b, "YardOptions")) {
            Some(Value::Sequence(seq)) => seq
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Set the fail threshold and rebuild the projection.
    pub fn set_fail_on_severity(&mut self, severity: Severity) {
        self.set_global("FailOnSeverity", Value::String(severity.to_string()));
    }

    /// Set the global exclusion patterns and rebuild the projection.
    pub fn set_global_exclude(&mut self, patterns: Vec<String>) {
        self.set_global(
            "Exclude",
            Value::Sequence(patterns.into_iter().map(Value::String).collect()),
        );
    }

    /// Set the external tool options and rebuild the projection.
    pub fn set_yard_options(&mut self, options: Vec<String>) {
        self.set_global(
            "YardOptions",
            Value::Sequence(options.into_iter().map(Value::String).collect()),
        );
    }

    /// Set one key in a validator's block and rebuild the projection.
    pub fn set_validator_option(&mut self, name: &str, key: &str, value: Value) {
        let block_key = Value::String(name.to_string());
        let mut block = match self.raw.get(&block_key) {
            Some(Value::Mapping(m)) => m.clone(),
            _ => Mapping::new(),
        };
        block.insert(Value::String(key.to_string()), value);
        self.raw.insert(block_key, Value::Mapping(block));
        self.rebuild();
    }

    /// Enable or disable a validator and rebuild the projection.
    pub fn set_validator_enabled(&mut self, name: &str, enabled: bool) {
        self.set_validator_option(name, "Enabled", Value::Bool(enabled));
    }

    fn set_global(&mut self, key: &str, value: Value) {
        let block_key = Value::String("AllValidators".to_string());
        let mut block = match self.raw.get(&block_key) {
            Some(Value::Mapping(m)) => m.clone(),
            _ => Mapping::new(),
        };
        block.insert(Value::String(key.to_string()), value);
        self.raw.insert(block_key, Value::Mapping(block));
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.validators = Self::build_validators(&self.raw);
    }

    fn global_block(&self) -> Option<&Mapping> {
        match get(&self.raw, "AllValidators") {
            Some(Value::Mapping(m)) => Some(m),
            _ => None,
        }
    }

    fn build_validators(raw: &Mapping) -> BTreeMap<&'static str, ValidatorSettings> {
        let mut validators = BTreeMap::new();

        for descriptor in registry::all() {
            let mut merged = default_block(descriptor);

            if let Some(Value::Mapping(block)) = get(raw, descriptor.department) {
                apply_block(&mut merged, block);
            }
            if let Some(Value::Mapping(block)) = get(raw, descriptor.name) {
                apply_block(&mut merged, block);
            }

            validators.insert(descriptor.name, settings_from(descriptor, merged));
        }

        validators
    }
}

/// Built-in default block for one validator.
fn default_block(descriptor: &ValidatorDescriptor) -> Mapping {
    let mut block = Mapping::new();
    block.insert(
        Value::String("Enabled".to_string()),
        Value::Bool(descriptor.enabled_by_default),
    );
    if let Some(severity) = descriptor.default_severity {
        block.insert(
            Value::String("Severity".to_string()),
            Value::String(severity.to_string()),
        );
    }
    block.insert(
        Value::String("Exclude".to_string()),
        Value::Sequence(Vec::new()),
    );
    for (key, values) in descriptor.extra_defaults {
        block.insert(
            Value::String(key.to_string()),
            Value::Sequence(
                values
                    .iter()
                    .map(|v| Value::String(v.to_string()))
                    .collect(),
            ),
        );
    }
    block
}

/// Apply one override block on top of a validator's merged settings.
///
/// Metadata keys are documentation, not configuration, and are skipped.
fn apply_block(target: &mut Mapping, block: &Mapping) {
    for (key, value) in block {
        if let Some(name) = key.as_str() {
            if METADATA_KEYS.contains(&name) {
                continue;
            }
        }
        let merged = match target.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        target.insert(key.clone(), merged);
    }
}

fn settings_from(descriptor: &ValidatorDescriptor, merged: Mapping) -> ValidatorSettings {
    let enabled = !matches!(get(&merged, "Enabled"), Some(Value::Bool(false)));

    let severity = get(&merged, "Severity")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .or(descriptor.default_severity)
        .unwrap_or_else(|| registry::department_severity(descriptor.department));

    let exclude = match get(&merged, "Exclude") {
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };

    ValidatorSettings {
        enabled,
        severity,
        exclude,
        options: merged,
    }
}

fn get<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(&Value::String(key.to_string()))
}
