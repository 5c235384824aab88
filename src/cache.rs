//! Command cache for external tool executions.
//!
//! Several validators issue textually identical commands (the whole
//! warnings department shares one stats invocation); the cache collapses
//! those into a single external execution. Keys are the SHA-256 of the
//! whitespace-normalized command text, so formatting differences between
//! two command strings never cause a second run.
//!
//! The cache is unbounded for the process lifetime, never retries a
//! non-zero exit, and is specified for single-threaded use only.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::shell::{self, CommandOutcome};

/// Hit/miss counters for one cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Total executions requested through the cache.
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Memoizes external command execution by normalized command text.
#[derive(Debug, Default)]
pub struct CommandCache {
    entries: HashMap<String, CommandOutcome>,
    stats: CacheStats,
}

impl CommandCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command through the cache.
    ///
    /// A hit returns an independent copy of the stored outcome; a miss
    /// runs the external process synchronously and stores the result,
    /// non-zero exits included.
    pub fn execute(&mut self, command: &str) -> crate::error::Result<CommandOutcome> {
        let key = cache_key(command);

        if let Some(cached) = self.entries.get(&key) {
            self.stats.hits += 1;
            tracing::debug!(command, "command cache hit");
            return Ok(cached.clone());
        }

        self.stats.misses += 1;
        let outcome = shell::execute(command)?;
        self.entries.insert(key, outcome.clone());
        Ok(outcome)
    }

    /// Hit/miss statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop all entries and counters (test isolation).
    pub fn reset(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}

/// SHA-256 of the whitespace-normalized command text.
fn cache_key(command: &str) -> String {
    let normalized = command.split_whitespace().collect::<Vec<_>>().join(" ");
    hex::encode(Sha256::digest(normalized.as_bytes()))
}
