//! Application service — prerequisite and privilege resolution.
//!
//! Shared by the update pipeline (fail-fast) and the doctor report
//! (collect everything). Neither path mutates the host.

use tracing::debug;

use crate::application::ports::{PrivilegeProbe, ToolLocator};
use crate::domain::{PrivilegeCheck, PrivilegeContext, REQUIRED_TOOLS, ToolCheck, UpdateError};

/// Look up every required tool without failing.
pub fn check_tools(tools: &impl ToolLocator) -> Vec<ToolCheck> {
    REQUIRED_TOOLS
        .iter()
        .map(|name| {
            let path = tools.locate(name);
            debug!(tool = name, found = ?path, "located tool");
            ToolCheck {
                name: (*name).to_string(),
                path,
            }
        })
        .collect()
}

/// Verify every required tool is on `PATH`.
///
/// # Errors
///
/// Returns `MissingDependency` naming the first absent tool.
pub fn verify_prerequisites(tools: &impl ToolLocator) -> Result<Vec<ToolCheck>, UpdateError> {
    let checks = check_tools(tools);
    if let Some(missing) = checks.iter().find(|c| c.path.is_none()) {
        return Err(UpdateError::MissingDependency {
            tool: missing.name.clone(),
        });
    }
    Ok(checks)
}

/// Determine how package operations would be privileged, without failing.
///
/// The helper is only looked up when the process is not already elevated.
pub fn check_privilege(
    probe: &impl PrivilegeProbe,
    tools: &impl ToolLocator,
    helper: &str,
) -> PrivilegeCheck {
    if probe.is_elevated() {
        return PrivilegeCheck::Elevated;
    }
    match tools.locate(helper) {
        Some(path) => PrivilegeCheck::Helper { path },
        None => PrivilegeCheck::Unavailable {
            helper: helper.to_string(),
        },
    }
}

/// Resolve the privilege context for this run.
///
/// # Errors
///
/// Returns `PrivilegeUnavailable` when not elevated and `helper` is absent.
pub fn resolve_privilege(
    probe: &impl PrivilegeProbe,
    tools: &impl ToolLocator,
    helper: &str,
) -> Result<PrivilegeContext, UpdateError> {
    match check_privilege(probe, tools, helper) {
        PrivilegeCheck::Elevated => Ok(PrivilegeContext::Elevated),
        PrivilegeCheck::Helper { path } => Ok(PrivilegeContext::Escalated { helper: path }),
        PrivilegeCheck::Unavailable { helper } => Err(UpdateError::PrivilegeUnavailable { helper }),
    }
}
