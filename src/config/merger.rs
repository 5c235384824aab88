//! Deep merge algorithm for YAML configuration values.
//!
//! doclint layers configuration documents: inherited documents first,
//! left-to-right, with the inheriting document merged on top. This module
//! implements the merge semantics shared by inheritance resolution and
//! per-validator projection.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively, key by key
//! - Arrays are replaced entirely (not concatenated)
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge two YAML values.
///
/// Later values override earlier values at the point of conflict.
/// Mappings are merged recursively. Arrays are replaced entirely.
///
/// # Arguments
///
/// * `base` - The base configuration
/// * `overlay` - The overlay configuration (takes precedence)
///
/// # Returns
///
/// A new Value with merged contents
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        // Both are mappings: merge recursively
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        // Anything else: overlay wins (arrays included)
        (_, overlay) => overlay.clone(),
    }
}

/// Merge multiple documents in order (later overrides earlier).
///
/// # Arguments
///
/// * `documents` - Slice of documents in merge order (first is base, last
///   has highest priority)
pub fn merge_documents(documents: &[Value]) -> Value {
    documents
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, doc| {
            deep_merge(&acc, doc)
        })
}
