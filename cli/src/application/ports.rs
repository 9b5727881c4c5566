//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::{ExecutionRoot, PrivilegeContext, StackctlConfig};

// ── Host Environment Ports ────────────────────────────────────────────────────

/// Locates and enters the execution root.
pub trait RootResolver {
    /// Resolve the execution root and make it the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be resolved or entered.
    fn enter(&self) -> Result<ExecutionRoot>;
}

/// Looks up executables on the execution path.
pub trait ToolLocator {
    /// Resolve `tool` to an executable path, or `None` when absent.
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

/// Reports the current process privilege level.
pub trait PrivilegeProbe {
    /// Whether the process already runs with root rights.
    fn is_elevated(&self) -> bool;
}

// ── External System Ports ─────────────────────────────────────────────────────

/// Container-stack manager. The descriptor is fixed by the adapter.
#[allow(async_fn_in_trait)]
pub trait StackManager {
    /// Tear down the stack's containers, keeping volumes.
    async fn stop(&self) -> Result<ExitStatus>;
    /// Create and start every service in the background.
    async fn start_detached(&self) -> Result<ExitStatus>;
}

/// OS package manager. Every call runs through the given privilege context.
#[allow(async_fn_in_trait)]
pub trait PackageManager {
    /// Refresh the package index.
    async fn refresh_index(&self, privilege: &PrivilegeContext) -> Result<ExitStatus>;
    /// Upgrade every installed package without prompting.
    async fn upgrade_all(&self, privilege: &PrivilegeContext) -> Result<ExitStatus>;
    /// Remove packages that are no longer needed.
    async fn remove_unused(&self, privilege: &PrivilegeContext) -> Result<ExitStatus>;
}

/// Version-control client for the checkout in the execution root.
#[allow(async_fn_in_trait)]
pub trait SourceControl {
    /// Query uncommitted changes in porcelain format (captured output).
    async fn query_status(&self) -> Result<Output>;
    /// Fetch and rebase the checkout onto its upstream.
    async fn sync_with_upstream(&self) -> Result<ExitStatus>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// No timeout is applied: a hung program hangs the caller.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with inherited stdio and return only its exit status.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored file cannot be read or parsed.
    fn load(&self) -> Result<StackctlConfig>;
    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &StackctlConfig) -> Result<()>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
