//! Application service — the host update pipeline.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! Steps run strictly in `Step::ORDER`. The first failure aborts the run;
//! nothing is retried or rolled back, and the stack is only restarted after
//! the source sync succeeds.

use std::process::ExitStatus;

use tracing::{debug, info};

use crate::application::ports::{
    PackageManager, PrivilegeProbe, ProgressReporter, RootResolver, SourceControl, StackManager,
    ToolLocator,
};
use crate::application::services::prerequisites::{resolve_privilege, verify_prerequisites};
use crate::domain::error::EXIT_FAILURE;
use crate::domain::{PipelineState, Step, UpdateError, UpdateReport, WorkingTree};

// ── Public types ──────────────────────────────────────────────────────────────

/// The external collaborators of one update run.
pub struct UpdateOrchestrator<'a, Root, Tools, Probe, Stack, Pkgs, Vcs> {
    /// Resolves and enters the execution root.
    pub root: &'a Root,
    /// Finds required tools and the privilege helper.
    pub tools: &'a Tools,
    /// Reports whether the process is already elevated.
    pub probe: &'a Probe,
    /// Container-stack manager.
    pub stack: &'a Stack,
    /// OS package manager.
    pub packages: &'a Pkgs,
    /// Version-control client.
    pub source: &'a Vcs,
    /// Name of the escalation helper to look up when not elevated.
    pub helper: &'a str,
}

impl<Root, Tools, Probe, Stack, Pkgs, Vcs> UpdateOrchestrator<'_, Root, Tools, Probe, Stack, Pkgs, Vcs>
where
    Root: RootResolver,
    Tools: ToolLocator,
    Probe: PrivilegeProbe,
    Stack: StackManager,
    Pkgs: PackageManager,
    Vcs: SourceControl,
{
    /// Run the full pipeline once.
    ///
    /// # Errors
    ///
    /// Returns the `UpdateError` of the first step that fails. Steps after it
    /// are never attempted.
    pub async fn run(&self, reporter: &impl ProgressReporter) -> Result<UpdateReport, UpdateError> {
        let mut run = Tracker::new(reporter);

        run.begin(Step::ResolveRoot);
        let root = run.finish(
            Step::ResolveRoot,
            self.root.enter().map_err(|e| spawn_error(Step::ResolveRoot, &e)),
        )?;
        info!(root = %root.path.display(), "entered execution root");

        run.begin(Step::Prerequisites);
        run.finish(Step::Prerequisites, verify_prerequisites(self.tools))?;

        run.begin(Step::Privilege);
        let privilege = run.finish(
            Step::Privilege,
            resolve_privilege(self.probe, self.tools, self.helper),
        )?;
        debug!(?privilege, "privilege context resolved");

        run.begin(Step::StopStack);
        run.finish(Step::StopStack, check(Step::StopStack, self.stack.stop().await))?;

        run.begin(Step::RefreshIndex);
        run.finish(
            Step::RefreshIndex,
            check(Step::RefreshIndex, self.packages.refresh_index(&privilege).await),
        )?;

        run.begin(Step::UpgradePackages);
        run.finish(
            Step::UpgradePackages,
            check(Step::UpgradePackages, self.packages.upgrade_all(&privilege).await),
        )?;

        run.begin(Step::RemoveUnused);
        run.finish(
            Step::RemoveUnused,
            check(Step::RemoveUnused, self.packages.remove_unused(&privilege).await),
        )?;

        run.begin(Step::VerifyTree);
        run.finish(Step::VerifyTree, self.verify_tree().await)?;

        run.begin(Step::SyncSource);
        run.finish(
            Step::SyncSource,
            check(Step::SyncSource, self.source.sync_with_upstream().await),
        )?;

        run.begin(Step::StartStack);
        run.finish(
            Step::StartStack,
            check(Step::StartStack, self.stack.start_detached().await),
        )?;

        reporter.success("update complete");
        Ok(UpdateReport {
            root: root.path,
            privilege: privilege.mode(),
            steps: run.completed,
            state: run.state,
        })
    }

    async fn verify_tree(&self) -> Result<(), UpdateError> {
        let output = self
            .source
            .query_status()
            .await
            .map_err(|e| spawn_error(Step::VerifyTree, &e))?;
        if !output.status.success() {
            return Err(UpdateError::CommandFailed {
                step: Step::VerifyTree,
                code: exit_code(output.status),
            });
        }
        match WorkingTree::from_porcelain(&String::from_utf8_lossy(&output.stdout)) {
            WorkingTree::Clean => Ok(()),
            WorkingTree::Dirty(entries) => Err(UpdateError::DirtyWorkingTree { entries }),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Exit code observed for a finished process.
///
/// A process killed by a signal reports `128 + signal`, as a shell would.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(EXIT_FAILURE)
}

fn check(step: Step, result: anyhow::Result<ExitStatus>) -> Result<(), UpdateError> {
    let status = result.map_err(|e| spawn_error(step, &e))?;
    if status.success() {
        Ok(())
    } else {
        Err(UpdateError::CommandFailed {
            step,
            code: exit_code(status),
        })
    }
}

fn spawn_error(step: Step, err: &anyhow::Error) -> UpdateError {
    UpdateError::Spawn {
        step,
        detail: format!("{err:#}"),
    }
}

/// Walks the pipeline state machine and reports progress.
struct Tracker<'r, R> {
    reporter: &'r R,
    state: PipelineState,
    completed: Vec<Step>,
}

impl<'r, R: ProgressReporter> Tracker<'r, R> {
    fn new(reporter: &'r R) -> Self {
        Self {
            reporter,
            state: PipelineState::Start,
            completed: Vec::with_capacity(Step::ORDER.len()),
        }
    }

    fn begin(&self, step: Step) {
        info!(step = %step, "step started");
        self.reporter.step(step.describe());
    }

    fn finish<T>(&mut self, step: Step, result: Result<T, UpdateError>) -> Result<T, UpdateError> {
        self.state = self.state.advance(step, result.is_ok());
        match result {
            Ok(value) => {
                self.completed.push(step);
                debug!(step = %step, state = ?self.state, "step finished");
                self.reporter.success(step.completed());
                Ok(value)
            }
            Err(e) => {
                info!(step = %step, exit_code = e.exit_code(), "step failed: {e}");
                Err(e)
            }
        }
    }
}
