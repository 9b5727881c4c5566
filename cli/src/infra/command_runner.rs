//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution. Calls are awaited one at a time and no
//! timeout is imposed.

use std::process::{ExitStatus, Output, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` backed by `tokio::process`.
///
/// Children are killed if the awaiting future is dropped (e.g. on Ctrl-C).
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner {
    stdout_to_stderr: bool,
}

impl TokioCommandRunner {
    /// A runner whose inherited-stdio children write their standard output
    /// to this process's stderr, leaving stdout to the caller.
    #[must_use]
    pub fn with_stdout_to_stderr() -> Self {
        Self {
            stdout_to_stderr: true,
        }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        debug!(program, ?args, "running (captured)");
        tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to spawn {program}"))
    }

    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        debug!(
            program,
            ?args,
            stdout_to_stderr = self.stdout_to_stderr,
            "running (inherited stdio)"
        );
        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args).kill_on_drop(true);
        if self.stdout_to_stderr {
            cmd.stdout(std::io::stderr());
        }
        let mut child = cmd
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
