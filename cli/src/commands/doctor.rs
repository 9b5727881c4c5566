//! `stackctl doctor` — report whether an update could run, without changing anything.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::doctor::run_doctor;
use crate::domain::{blocking_error, collect_issues};
use crate::infra::host::{EffectiveUid, HostRoot, PathLocator};
use crate::output::{QuietReporter, Renderer, progress};

/// Run `stackctl doctor`.
///
/// # Errors
///
/// Returns the error an update would abort with, if any check blocks it.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let root = HostRoot::new(app.root.clone(), app.config.stack.compose_file.as_str());

    let spinner = (!app.is_json() && app.output.show_progress())
        .then(|| progress::spinner("running diagnostics..."));
    let checks = run_doctor(
        &root,
        &PathLocator,
        &EffectiveUid,
        &app.config.privilege.helper,
        &QuietReporter,
    );
    if let Some(pb) = &spinner {
        progress::finish_clear(pb);
    }
    let checks = checks?;

    match app.renderer() {
        Renderer::Human(renderer) => renderer.render_doctor(&checks, &collect_issues(&checks)),
        Renderer::Json(renderer) => renderer.render_doctor(&checks)?,
    }

    match blocking_error(&checks) {
        None => Ok(ExitCode::SUCCESS),
        // The JSON report already lists every issue.
        Some(err) if app.is_json() => Ok(ExitCode::from(
            u8::try_from(err.exit_code()).unwrap_or(1),
        )),
        Some(err) => Err(err.into()),
    }
}
