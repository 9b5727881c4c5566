//! Doctor check domain types and pure diagnostic functions.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::error::UpdateError;
use crate::domain::root::ExecutionRoot;

// ── Types ─────────────────────────────────────────────────────────────────────

/// All checks returned by the doctor command.
#[derive(Debug, Serialize)]
pub struct DoctorChecks {
    /// Resolved execution root.
    pub root: ExecutionRoot,
    /// One entry per required tool, in check order.
    pub tools: Vec<ToolCheck>,
    /// How package operations would be privileged.
    pub privilege: PrivilegeCheck,
}

/// Lookup result for one required tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCheck {
    pub name: String,
    /// Resolved location, `None` when not on `PATH`.
    pub path: Option<PathBuf>,
}

/// Privilege resolution result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "mode")]
pub enum PrivilegeCheck {
    Elevated,
    Helper { path: PathBuf },
    Unavailable { helper: String },
}

// ── Pure functions ────────────────────────────────────────────────────────────

/// Human-readable list of problems found by the doctor checks.
#[must_use]
pub fn collect_issues(checks: &DoctorChecks) -> Vec<String> {
    let mut issues = Vec::new();
    if !checks.root.descriptor_present {
        issues.push(format!(
            "{} not found in {}",
            checks.root.descriptor.display(),
            checks.root.path.display()
        ));
    }
    for tool in checks.tools.iter().filter(|t| t.path.is_none()) {
        issues.push(format!("{} is not installed", tool.name));
    }
    if let PrivilegeCheck::Unavailable { helper } = &checks.privilege {
        issues.push(format!("not running as root and {helper} is not installed"));
    }
    issues
}

/// The error an update run would abort with, given these checks.
///
/// Mirrors the pipeline order: missing tools are reported before privilege.
#[must_use]
pub fn blocking_error(checks: &DoctorChecks) -> Option<UpdateError> {
    if let Some(tool) = checks.tools.iter().find(|t| t.path.is_none()) {
        return Some(UpdateError::MissingDependency {
            tool: tool.name.clone(),
        });
    }
    match &checks.privilege {
        PrivilegeCheck::Unavailable { helper } => Some(UpdateError::PrivilegeUnavailable {
            helper: helper.clone(),
        }),
        _ => None,
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
