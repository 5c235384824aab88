//! Error types for doclint operations.
//!
//! This module defines [`DoclintError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal configuration problems (missing explicit config, parse
//!   failures, inheritance cycles) surface as `DoclintError` variants and
//!   abort before any validator runs
//! - Everything past config resolution degrades per-validator: a failed
//!   external invocation contributes zero offenses instead of an error
//! - Use `anyhow::Error` (via `DoclintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for doclint operations.
#[derive(Debug, Error)]
pub enum DoclintError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration document.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration inheritance chain revisited a document.
    #[error("Circular configuration inheritance detected: {path}")]
    CircularInheritance { path: PathBuf },

    /// External command could not be spawned at all.
    #[error("Command failed to start: {command}")]
    CommandFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for doclint operations.
pub type Result<T> = std::result::Result<T, DoclintError>;
