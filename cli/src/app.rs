//! Application context — unified state passed to every command handler.
//!
//! `AppContext` carries output settings, the loaded configuration, and the
//! execution-root override so command handlers share one construction path.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use crate::application::services::config_service;
use crate::domain::{StackctlConfig, UpdateError};
use crate::domain::error::EXIT_FAILURE;
use crate::infra::config::YamlConfigStore;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `STACKCTL_YES` env vars).
    pub yes: bool,
    /// Explicit execution root, bypassing discovery.
    pub root: Option<PathBuf>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration persistence.
    pub config_store: YamlConfigStore,
    /// Configuration loaded at startup.
    pub config: StackctlConfig,
    /// Explicit execution root, if given.
    pub root: Option<PathBuf>,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when `--yes` / `-y` or `--json` is passed, or when the `CI` or
    /// `STACKCTL_YES` environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored configuration cannot be read or parsed.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("STACKCTL_YES").is_ok();
        let non_interactive = flags.behaviour.yes || flags.output.json || ci_env;

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let config_store = YamlConfigStore;
        let config = config_service::load_config(&config_store)?;

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store,
            config,
            root: flags.behaviour.root,
            non_interactive,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true`, returns `default` immediately
    /// without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}

// ── Error reporting ───────────────────────────────────────────────────────────

/// Process exit code for a command error.
///
/// Pipeline errors carry their own code; anything else is a generic failure.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<UpdateError>()
        .map_or(EXIT_FAILURE, UpdateError::exit_code);
    u8::try_from(code).unwrap_or(1)
}

/// Stable error identifier for JSON output.
#[must_use]
pub fn error_code_for(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<UpdateError>()
        .map_or("error", UpdateError::code)
}

/// Print the single diagnostic line for `err` and return the exit code.
#[must_use]
pub fn report_error(err: &anyhow::Error, json: bool) -> ExitCode {
    if json {
        match crate::output::json::format_error(&err.to_string(), error_code_for(err)) {
            Ok(out) => println!("{out}"),
            Err(_) => eprintln!("Error: {err}"),
        }
    } else {
        eprintln!("Error: {err}");
    }
    ExitCode::from(exit_code_for(err))
}
