//! Version command

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::output::Renderer;

/// Run the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let version = env!("CARGO_PKG_VERSION");
    match app.renderer() {
        Renderer::Human(renderer) => renderer.render_version(version),
        Renderer::Json(renderer) => renderer.render_version(version)?,
    }
    Ok(ExitCode::SUCCESS)
}
