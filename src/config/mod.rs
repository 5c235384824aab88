//! Configuration loading, inheritance, and projection.
//!
//! A run's configuration starts as a hierarchical YAML document, goes
//! through inheritance resolution ([`inheritance`]), deep merging
//! ([`merger`]), and ends as an immutable per-validator projection
//! ([`EffectiveConfig`]). Discovery of the well-known file lives in
//! [`loader`].

pub mod effective;
pub mod inheritance;
pub mod loader;
pub mod merger;

pub use effective::{EffectiveConfig, ValidatorSettings, DEFAULT_EXCLUDE};
pub use inheritance::{GemLocator, InheritanceResolver, SystemGemLocator};
pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use merger::{deep_merge, merge_documents};
