//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

use crate::domain::pipeline::Step;

/// Exit code for a required tool that cannot be found (shell "command not found").
pub const EXIT_MISSING_DEPENDENCY: i32 = 127;

/// Generic failure exit code.
pub const EXIT_FAILURE: i32 = 1;

// ── Update errors ─────────────────────────────────────────────────────────────

/// Terminal failures of the update pipeline. Every variant aborts the run.
///
/// Each message is one line naming the aborted step and the exit code the
/// process will report.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(
        "Step '{}' aborted (exit {}): required tool '{tool}' not found on PATH.",
        Step::Prerequisites,
        EXIT_MISSING_DEPENDENCY
    )]
    MissingDependency { tool: String },

    #[error(
        "Step '{}' aborted (exit {}): not running as root and privilege helper '{helper}' not found on PATH.",
        Step::Privilege,
        EXIT_FAILURE
    )]
    PrivilegeUnavailable { helper: String },

    #[error("Step '{step}' failed with exit code {}.", command_exit_code(.code))]
    CommandFailed { step: Step, code: i32 },

    #[error(
        "Step '{}' aborted (exit {}): working tree has {} uncommitted change(s); commit or stash them before updating.",
        Step::VerifyTree,
        EXIT_FAILURE,
        .entries.len()
    )]
    DirtyWorkingTree { entries: Vec<String> },

    #[error("Step '{step}' could not run (exit {}): {detail}", spawn_exit_code(.step))]
    Spawn { step: Step, detail: String },
}

/// A command that "failed" with status 0 still reports a failure.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn command_exit_code(code: &i32) -> i32 {
    if *code == 0 { EXIT_FAILURE } else { *code }
}

/// An unenterable execution root is a plain failure, not a missing program.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn spawn_exit_code(step: &Step) -> i32 {
    match step {
        Step::ResolveRoot => EXIT_FAILURE,
        _ => EXIT_MISSING_DEPENDENCY,
    }
}

impl UpdateError {
    /// Process exit code reported for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            UpdateError::MissingDependency { .. } => EXIT_MISSING_DEPENDENCY,
            UpdateError::CommandFailed { code, .. } => command_exit_code(code),
            UpdateError::Spawn { step, .. } => spawn_exit_code(step),
            UpdateError::PrivilegeUnavailable { .. } | UpdateError::DirtyWorkingTree { .. } => {
                EXIT_FAILURE
            }
        }
    }

    /// Stable machine-readable identifier used in JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            UpdateError::MissingDependency { .. } => "missing-dependency",
            UpdateError::PrivilegeUnavailable { .. } => "privilege-unavailable",
            UpdateError::CommandFailed { .. } => "command-failed",
            UpdateError::DirtyWorkingTree { .. } => "dirty-working-tree",
            UpdateError::Spawn { .. } => "spawn",
        }
    }

    /// The pipeline step this error aborted.
    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            UpdateError::MissingDependency { .. } => Step::Prerequisites,
            UpdateError::PrivilegeUnavailable { .. } => Step::Privilege,
            UpdateError::DirtyWorkingTree { .. } => Step::VerifyTree,
            UpdateError::CommandFailed { step, .. } | UpdateError::Spawn { step, .. } => *step,
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
