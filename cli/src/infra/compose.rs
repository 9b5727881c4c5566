//! Infrastructure implementation of the `StackManager` port.
//!
//! `ComposeStack<R>` routes `docker compose` calls through a `CommandRunner`.
//! Paths are relative to the execution root, which is the working directory
//! once the root has been entered.

use std::process::ExitStatus;

use anyhow::Result;

use crate::application::ports::{CommandRunner, StackManager};

/// Docker Compose adapter for the managed stack.
pub struct ComposeStack<R: CommandRunner> {
    runner: R,
    compose_file: String,
}

impl<R: CommandRunner> ComposeStack<R> {
    /// Create an adapter for the descriptor `compose_file`.
    pub fn new(runner: R, compose_file: impl Into<String>) -> Self {
        Self {
            runner,
            compose_file: compose_file.into(),
        }
    }
}

impl<R: CommandRunner> StackManager for ComposeStack<R> {
    async fn stop(&self) -> Result<ExitStatus> {
        self.runner
            .run_status("docker", &["compose", "-f", &self.compose_file, "down"])
            .await
    }

    async fn start_detached(&self) -> Result<ExitStatus> {
        self.runner
            .run_status("docker", &["compose", "-f", &self.compose_file, "up", "-d"])
            .await
    }
}
