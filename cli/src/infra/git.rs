//! Infrastructure implementation of the `SourceControl` port.

use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::application::ports::{CommandRunner, SourceControl};

/// `git` adapter for the checkout in the working directory.
pub struct GitCheckout<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GitCheckout<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> SourceControl for GitCheckout<R> {
    async fn query_status(&self) -> Result<Output> {
        self.runner.run("git", &["status", "--porcelain"]).await
    }

    async fn sync_with_upstream(&self) -> Result<ExitStatus> {
        self.runner.run_status("git", &["pull", "--rebase"]).await
    }
}
