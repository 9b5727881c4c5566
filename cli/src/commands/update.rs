//! `stackctl update` — stop the stack, update the host, sync source, restart.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::update::UpdateOrchestrator;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::compose::ComposeStack;
use crate::infra::git::GitCheckout;
use crate::infra::host::{EffectiveUid, HostRoot, PathLocator};
use crate::infra::packages::AptPackages;
use crate::output::{QuietReporter, Renderer, TerminalReporter};

/// Run `stackctl update`.
///
/// # Errors
///
/// Returns the `UpdateError` of the first failing step.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    if !app.confirm("Stop the stack and update this host?", true)? {
        app.output.info("Update cancelled.");
        return Ok(ExitCode::SUCCESS);
    }

    let compose_file = app.config.stack.compose_file.as_str();
    // Tool output must not interleave with the JSON document on stdout.
    let runner = if app.is_json() {
        TokioCommandRunner::with_stdout_to_stderr()
    } else {
        TokioCommandRunner::default()
    };
    let root = HostRoot::new(app.root.clone(), compose_file);
    let stack = ComposeStack::new(runner, compose_file);
    let packages = AptPackages::new(runner);
    let source = GitCheckout::new(runner);

    let orchestrator = UpdateOrchestrator {
        root: &root,
        tools: &PathLocator,
        probe: &EffectiveUid,
        stack: &stack,
        packages: &packages,
        source: &source,
        helper: &app.config.privilege.helper,
    };

    let report = match app.renderer() {
        Renderer::Human(renderer) => {
            let report = orchestrator.run(&TerminalReporter::new(&app.output)).await?;
            renderer.render_report(&report);
            report
        }
        Renderer::Json(renderer) => {
            let report = orchestrator.run(&QuietReporter).await?;
            renderer.render_report(&report)?;
            report
        }
    };
    tracing::info!(steps = report.steps.len(), "update finished");

    Ok(ExitCode::SUCCESS)
}
