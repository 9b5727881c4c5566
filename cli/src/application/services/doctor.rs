//! Application service — read-only doctor report.

use anyhow::Result;

use crate::application::ports::{PrivilegeProbe, ProgressReporter, RootResolver, ToolLocator};
use crate::application::services::prerequisites::{check_privilege, check_tools};
use crate::domain::DoctorChecks;

/// Run every precondition check the update pipeline performs, without
/// mutating the host or stopping at the first problem.
///
/// # Errors
///
/// Returns an error only if the execution root cannot be resolved.
pub fn run_doctor(
    root: &impl RootResolver,
    tools: &impl ToolLocator,
    probe: &impl PrivilegeProbe,
    helper: &str,
    reporter: &impl ProgressReporter,
) -> Result<DoctorChecks> {
    reporter.step("resolving execution root...");
    let root = root.enter()?;

    reporter.step("checking prerequisites...");
    let tools_checked = check_tools(tools);

    reporter.step("checking privileges...");
    let privilege = check_privilege(probe, tools, helper);

    reporter.success("diagnostics complete");

    Ok(DoctorChecks {
        root,
        tools: tools_checked,
        privilege,
    })
}
