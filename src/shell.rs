//! Shell command execution.
//!
//! Validators hand the runner one opaque command string; this module runs
//! it synchronously through `sh -c` and captures the three things the
//! pipeline cares about: stdout, stderr, exit code. Bounding a hung tool
//! is the caller's responsibility, not ours.

use std::process::Command;

use crate::error::{DoclintError, Result};

/// Captured outcome of one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Standard output.
    pub stdout: String,
    /// Standard error, retained for diagnostics only.
    pub stderr: String,
    /// Exit code (`None` if killed by signal).
    pub exit_code: Option<i32>,
}

impl CommandOutcome {
    /// Whether the command exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Execute a shell command synchronously, capturing output.
///
/// A non-zero exit is a normal outcome here; only failure to spawn the
/// shell at all is an error.
pub fn execute(command: &str) -> Result<CommandOutcome> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .map_err(|_| DoclintError::CommandFailed {
            command: command.to_string(),
        })?;

    Ok(CommandOutcome {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code(),
    })
}

/// Quote a string for safe interpolation into a shell command.
pub fn quote(s: &str) -> String {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b"._-/".contains(&b)) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}
