//! Update pipeline steps, state machine, and run report.
//!
//! Pure types only — no I/O, no async, no process handling.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

// ── Steps ─────────────────────────────────────────────────────────────────────

/// One step of the update pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    ResolveRoot,
    Prerequisites,
    Privilege,
    StopStack,
    RefreshIndex,
    UpgradePackages,
    RemoveUnused,
    VerifyTree,
    SyncSource,
    StartStack,
}

impl Step {
    /// Every step in the only valid execution order.
    pub const ORDER: [Step; 10] = [
        Step::ResolveRoot,
        Step::Prerequisites,
        Step::Privilege,
        Step::StopStack,
        Step::RefreshIndex,
        Step::UpgradePackages,
        Step::RemoveUnused,
        Step::VerifyTree,
        Step::SyncSource,
        Step::StartStack,
    ];

    /// Stable identifier used in diagnostics and JSON output.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Step::ResolveRoot => "resolve-root",
            Step::Prerequisites => "prerequisites",
            Step::Privilege => "privilege",
            Step::StopStack => "stop-stack",
            Step::RefreshIndex => "refresh-index",
            Step::UpgradePackages => "upgrade-packages",
            Step::RemoveUnused => "remove-unused",
            Step::VerifyTree => "verify-tree",
            Step::SyncSource => "sync-source",
            Step::StartStack => "start-stack",
        }
    }

    /// Progress message shown while the step runs.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Step::ResolveRoot => "resolving execution root...",
            Step::Prerequisites => "checking prerequisites...",
            Step::Privilege => "resolving privilege context...",
            Step::StopStack => "stopping stack...",
            Step::RefreshIndex => "refreshing package index...",
            Step::UpgradePackages => "upgrading packages...",
            Step::RemoveUnused => "removing unused packages...",
            Step::VerifyTree => "checking working tree...",
            Step::SyncSource => "syncing source with upstream...",
            Step::StartStack => "starting stack...",
        }
    }

    /// Message shown once the step succeeds.
    #[must_use]
    pub fn completed(self) -> &'static str {
        match self {
            Step::ResolveRoot => "execution root resolved",
            Step::Prerequisites => "prerequisites found",
            Step::Privilege => "privilege context resolved",
            Step::StopStack => "stack stopped",
            Step::RefreshIndex => "package index refreshed",
            Step::UpgradePackages => "packages upgraded",
            Step::RemoveUnused => "unused packages removed",
            Step::VerifyTree => "working tree clean",
            Step::SyncSource => "source synced",
            Step::StartStack => "stack started",
        }
    }

    /// The pipeline state reached once this step succeeds, if it completes a stage.
    ///
    /// Package refresh and upgrade are sub-steps of the package stage; only
    /// `RemoveUnused` moves the pipeline to `PackagesUpdated`.
    #[must_use]
    pub fn reaches(self) -> Option<PipelineState> {
        match self {
            Step::ResolveRoot | Step::RefreshIndex | Step::UpgradePackages => None,
            Step::Prerequisites => Some(PipelineState::PrereqOk),
            Step::Privilege => Some(PipelineState::PrivilegeOk),
            Step::StopStack => Some(PipelineState::Stopped),
            Step::RemoveUnused => Some(PipelineState::PackagesUpdated),
            Step::VerifyTree => Some(PipelineState::TreeVerifiedClean),
            Step::SyncSource => Some(PipelineState::Synced),
            Step::StartStack => Some(PipelineState::Done),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

/// Pipeline state. Linear; any failure moves to `Aborted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "state", content = "step")]
pub enum PipelineState {
    Start,
    PrereqOk,
    PrivilegeOk,
    Stopped,
    PackagesUpdated,
    TreeVerifiedClean,
    Synced,
    Done,
    Aborted(Step),
}

impl PipelineState {
    /// Apply the outcome of `step` to the current state.
    ///
    /// Terminal states absorb every further transition.
    #[must_use]
    pub fn advance(self, step: Step, succeeded: bool) -> Self {
        if self.is_terminal() {
            return self;
        }
        if !succeeded {
            return PipelineState::Aborted(step);
        }
        step.reaches().unwrap_or(self)
    }

    /// Whether the pipeline can make no further progress.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Aborted(_))
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// How package operations were (or would be) privileged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "mode")]
pub enum PrivilegeMode {
    Elevated,
    Helper { path: PathBuf },
}

/// Result of a completed update run.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    /// Execution root all steps ran in.
    pub root: PathBuf,
    /// Privilege mode used for package operations.
    pub privilege: PrivilegeMode,
    /// Steps that completed, in order.
    pub steps: Vec<Step>,
    /// Final pipeline state.
    pub state: PipelineState,
}
