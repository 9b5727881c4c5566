//! Infrastructure implementation of the `PackageManager` port.
//!
//! `AptPackages<R>` wraps every `apt-get` call in the run's privilege context.

use std::process::ExitStatus;

use anyhow::Result;

use crate::application::ports::{CommandRunner, PackageManager};
use crate::domain::PrivilegeContext;

/// `apt-get` adapter.
pub struct AptPackages<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> AptPackages<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn apt(&self, privilege: &PrivilegeContext, args: &[&str]) -> Result<ExitStatus> {
        let invocation = privilege.wrap("apt-get", args);
        self.runner
            .run_status(&invocation.program, &invocation.arg_refs())
            .await
    }
}

impl<R: CommandRunner> PackageManager for AptPackages<R> {
    async fn refresh_index(&self, privilege: &PrivilegeContext) -> Result<ExitStatus> {
        self.apt(privilege, &["update"]).await
    }

    async fn upgrade_all(&self, privilege: &PrivilegeContext) -> Result<ExitStatus> {
        self.apt(privilege, &["-y", "upgrade"]).await
    }

    async fn remove_unused(&self, privilege: &PrivilegeContext) -> Result<ExitStatus> {
        self.apt(privilege, &["-y", "autoremove"]).await
    }
}
